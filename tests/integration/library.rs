use std::collections::HashMap;

use coursefit::core::catalog::Catalog;
use coursefit::core::context::AppContext;
use coursefit::core::models::{Item, ItemId, Section};
use coursefit::core::template::GridTemplate;
use coursefit::core::types::Weekday;
use coursefit::scheduler::ScheduleManager;
use coursefit::scheduler::policy::Placement;
use coursefit::scheduler::selector::GreedySelector;

use crate::common::{SAMPLE_CATALOG, make_temp_dir, write_catalog, write_school_config};

#[test]
fn context_and_manager_schedule_a_loaded_catalog() {
    let dir = make_temp_dir("library");
    write_school_config(&dir);
    write_catalog(&dir, SAMPLE_CATALOG);

    let ctx = AppContext::new_with_paths(dir.join("config.json"), dir.join("logs"))
        .expect("context should load");
    let catalog = Catalog::load_from(dir.join("catalog.json")).expect("catalog should load");

    let result = ScheduleManager::new(&ctx)
        .compute_schedule(&catalog.items, &HashMap::new())
        .expect("run should succeed");

    assert!(result.is_included(ItemId(0)));
    assert!(!result.is_included(ItemId(1)));
    assert!(result.is_included(ItemId(2)));
    assert_eq!(
        result.selection[1].placement,
        Placement::Section { index: 1 }
    );
    let chem_days: Vec<Weekday> = result.events_for(ItemId(0)).map(|e| e.weekday).collect();
    assert_eq!(
        chem_days,
        vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Fri]
    );
}

#[test]
fn independent_runs_do_not_share_state() {
    let template = GridTemplate::new()
        .with_period_on(&Weekday::STANDARD, "A", "9:00", "10:00")
        .unwrap()
        .with_period_on(&Weekday::BLOCK, "A", "9:00", "10:30")
        .unwrap();
    let items = vec![
        Item::recurring("Debate", ["A"]).with_importance(0.6),
        Item::sectioned(
            "Linear Algebra",
            vec![Section::new(vec![Weekday::Wed], "10:00", "11:00")],
        )
        .with_importance(0.7),
    ];
    let selector = GreedySelector::new(&template);

    let first = selector.run(&items, &HashMap::new()).unwrap();
    let second = selector.run(&items[..1], &HashMap::new()).unwrap();

    // Linear Algebra pushes Debate's block day to Thursday only in the
    // run that contains it.
    let debate_block = |r: &coursefit::scheduler::assembler::ScheduleResult, id| {
        r.events_for(ItemId(id))
            .map(|e| e.weekday)
            .find(|d| Weekday::BLOCK.contains(d))
    };
    assert_eq!(debate_block(&first, 0), Some(Weekday::Thu));
    assert_eq!(debate_block(&second, 0), Some(Weekday::Wed));
}
