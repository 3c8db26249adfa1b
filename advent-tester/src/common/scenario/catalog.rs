use advent_core::{DOOR_ORDER_KEY, KeyValueStore, MemoryStore, OPENED_DOORS_KEY};
use anyhow::{Result, ensure};
use chrono::Datelike;

use crate::logic::{SimulationPlan, SimulationSummary, VisitorPolicy};

pub struct CatalogEntry {
    pub key: &'static str,
    pub aliases: &'static [&'static str],
    pub title: &'static str,
    pub plan: SimulationPlan,
}

pub fn catalog_scenarios() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            key: "smoke",
            aliases: &[],
            title: "Smoke Test",
            plan: SimulationPlan::new((12, 1), 1, VisitorPolicy::ClickEverything)
                .with_expectation(first_of_december_expectation),
        },
        CatalogEntry {
            key: "full-season",
            aliases: &["season"],
            title: "Full Season Walkthrough",
            plan: SimulationPlan::new((12, 1), 31, VisitorPolicy::ClickEverything)
                .reloading()
                .with_expectation(one_new_door_per_day_expectation)
                .with_expectation(all_doors_open_expectation),
        },
        CatalogEntry {
            key: "off-season",
            aliases: &["locked"],
            title: "Off-Season Lockout",
            plan: SimulationPlan::new((1, 1), 334, VisitorPolicy::ClickEverything)
                .with_expectation(nothing_opens_expectation),
        },
        CatalogEntry {
            key: "corrupt-storage",
            aliases: &["corrupt"],
            title: "Corrupt Storage Recovery",
            plan: SimulationPlan::new((12, 5), 1, VisitorPolicy::TodayOnly)
                .with_setup(seed_garbage_records)
                .with_expectation(recovered_from_garbage_expectation),
        },
        CatalogEntry {
            key: "reset-cycle",
            aliases: &["reset"],
            title: "Mid-Season Reset",
            plan: SimulationPlan::new((12, 1), 24, VisitorPolicy::TodayOnly)
                .with_reset_on(11)
                .with_expectation(reset_cycle_expectation),
        },
        CatalogEntry {
            key: "reload-persistence",
            aliases: &["reload"],
            title: "Reload Persistence",
            plan: SimulationPlan::new((12, 10), 5, VisitorPolicy::Random { clicks: 6 })
                .reloading()
                .with_expectation(reload_keeps_state_expectation),
        },
        CatalogEntry {
            key: "random-visitor",
            aliases: &["random"],
            title: "Random Visitor",
            plan: SimulationPlan::new((12, 1), 31, VisitorPolicy::Random { clicks: 8 })
                .with_expectation(only_available_doors_expectation),
        },
        CatalogEntry {
            key: "new-year",
            aliases: &["rollover"],
            title: "Season Boundaries",
            plan: SimulationPlan::new((11, 28), 40, VisitorPolicy::ClickEverything)
                .reloading()
                .with_expectation(season_boundary_expectation),
        },
    ]
}

fn seed_garbage_records(store: &MemoryStore) {
    let Ok(()) = store.set(OPENED_DOORS_KEY, "{\"not\": \"a list\"");
    let Ok(()) = store.set(DOOR_ORDER_KEY, "[3,3,3]");
}

fn numbers(range: std::ops::RangeInclusive<u8>) -> Vec<u8> {
    range.collect()
}

fn first_of_december_expectation(summary: &SimulationSummary) -> Result<()> {
    let day = summary
        .day(12, 1)
        .ok_or_else(|| anyhow::anyhow!("December 1 was not simulated"))?;
    ensure!(day.opened_today == vec![1], "opened {:?} on Dec 1", day.opened_today);
    ensure!(day.rejected_clicks == 23, "expected 23 rejected clicks");
    ensure!(
        day.status.starts_with("Find and open door 1."),
        "unexpected status: {}",
        day.status
    );
    Ok(())
}

fn one_new_door_per_day_expectation(summary: &SimulationSummary) -> Result<()> {
    for record in &summary.days {
        let day = record.date.day();
        let expected: Vec<u8> = match u8::try_from(day) {
            Ok(door) if door <= 24 => vec![door],
            _ => Vec::new(),
        };
        ensure!(
            record.opened_today == expected,
            "{}: opened {:?}, expected {:?}",
            record.date,
            record.opened_today,
            expected
        );
    }
    Ok(())
}

fn all_doors_open_expectation(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.final_opened == numbers(1..=24),
        "only {} doors open at season end",
        summary.final_opened.len()
    );
    let christmas_eve = summary
        .day(12, 24)
        .ok_or_else(|| anyhow::anyhow!("December 24 was not simulated"))?;
    ensure!(
        christmas_eve.status == "All advent calendar doors are now available!",
        "unexpected status: {}",
        christmas_eve.status
    );
    Ok(())
}

fn nothing_opens_expectation(summary: &SimulationSummary) -> Result<()> {
    ensure!(summary.final_opened.is_empty(), "doors opened outside December");
    for record in &summary.days {
        ensure!(record.date.month() != 12, "{} is in December", record.date);
        ensure!(
            record.rejected_clicks == 24,
            "{}: {} clicks accepted",
            record.date,
            24 - record.rejected_clicks
        );
        ensure!(
            record.status == "The advent calendar will be available in December!",
            "{}: unexpected status {}",
            record.date,
            record.status
        );
    }
    ensure!(
        summary.final_order == summary.initial_order,
        "order changed without a reset"
    );
    Ok(())
}

fn recovered_from_garbage_expectation(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.initial_opened.is_empty(),
        "garbage opened record was accepted"
    );
    ensure!(
        summary.initial_order.len() == 24,
        "garbage order record was accepted"
    );
    ensure!(summary.final_opened == vec![5], "door 5 did not open");
    Ok(())
}

fn reset_cycle_expectation(summary: &SimulationSummary) -> Result<()> {
    ensure!(summary.resets() == 1, "expected exactly one reset");
    let reset_day = summary
        .day(12, 12)
        .ok_or_else(|| anyhow::anyhow!("December 12 was not simulated"))?;
    ensure!(reset_day.reset, "reset did not happen on Dec 12");
    ensure!(reset_day.opened_total == 0, "reset left doors open");
    ensure!(
        summary.final_opened == numbers(13..=24),
        "after reset expected doors 13-24, got {:?}",
        summary.final_opened
    );
    Ok(())
}

fn reload_keeps_state_expectation(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.final_order == summary.initial_order,
        "reload regenerated the door order"
    );
    let mut opened: Vec<u8> = summary
        .days
        .iter()
        .flat_map(|record| record.opened_today.iter().copied())
        .collect();
    opened.sort_unstable();
    ensure!(
        opened == summary.final_opened,
        "opened doors lost across reloads: {opened:?} vs {:?}",
        summary.final_opened
    );
    Ok(())
}

fn only_available_doors_expectation(summary: &SimulationSummary) -> Result<()> {
    for record in &summary.days {
        let today = record.date.day();
        ensure!(
            record
                .opened_today
                .iter()
                .all(|door| u32::from(*door) <= today),
            "{}: opened a future door {:?}",
            record.date,
            record.opened_today
        );
    }
    let mut previous = 0;
    for record in &summary.days {
        ensure!(
            record.opened_total >= previous,
            "{}: opened set shrank",
            record.date
        );
        previous = record.opened_total;
    }
    Ok(())
}

fn season_boundary_expectation(summary: &SimulationSummary) -> Result<()> {
    for record in &summary.days {
        if record.date.month() != 12 {
            ensure!(
                record.opened_today.is_empty(),
                "{}: opened {:?} outside December",
                record.date,
                record.opened_today
            );
        }
    }
    let dec1 = summary
        .day(12, 1)
        .ok_or_else(|| anyhow::anyhow!("December 1 was not simulated"))?;
    ensure!(dec1.opened_today == vec![1], "Dec 1 opened {:?}", dec1.opened_today);
    ensure!(summary.final_opened == numbers(1..=24), "season incomplete");
    let last = summary
        .days
        .last()
        .ok_or_else(|| anyhow::anyhow!("no days simulated"))?;
    ensure!(last.date.month() == 1, "walk did not reach January");
    Ok(())
}
