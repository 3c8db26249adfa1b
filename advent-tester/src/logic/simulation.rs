use advent_core::{
    CalendarDate, CalendarState, DOOR_ORDER_KEY, Door, DoorOrder, FixedClock, KeyValueStore,
    MemoryStore, OPENED_DOORS_KEY, OpenedDoors,
};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

/// Which doors the simulated visitor tries each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitorPolicy {
    /// Never clicks.
    Idle,
    /// Clicks every door on the grid once.
    ClickEverything,
    /// Clicks only the door matching today's day of month.
    TodayOnly,
    /// Clicks `clicks` random doors, repeats allowed.
    Random { clicks: u8 },
}

impl VisitorPolicy {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ClickEverything => "click-everything",
            Self::TodayOnly => "today-only",
            Self::Random { .. } => "random",
        }
    }

    fn clicks(self, date: CalendarDate, rng: &mut ChaCha20Rng) -> Vec<Door> {
        match self {
            Self::Idle => Vec::new(),
            Self::ClickEverything => Door::all().collect(),
            Self::TodayOnly => Door::new(date.day).into_iter().collect(),
            Self::Random { clicks } => (0..clicks)
                .filter_map(|_| Door::new(rng.gen_range(1..=24)).ok())
                .collect(),
        }
    }
}

/// Assertion hook run after a simulation completes.
pub type SimulationExpectation = fn(&SimulationSummary) -> Result<()>;

/// Seeds the store before the calendar first loads.
pub type StoreSetup = fn(&MemoryStore);

#[derive(Debug, Clone)]
pub struct SimulationPlan {
    /// First simulated day as (month, day); the year comes from the run.
    pub start: (u32, u32),
    pub days: u32,
    pub visitor: VisitorPolicy,
    /// Rebuild the calendar from storage every morning, like a page reload.
    pub reload_each_day: bool,
    /// Zero-based day index on which the visitor presses reset.
    pub reset_on: Option<u32>,
    pub setup: Option<StoreSetup>,
    pub expectations: Vec<SimulationExpectation>,
}

impl SimulationPlan {
    #[must_use]
    pub const fn new(start: (u32, u32), days: u32, visitor: VisitorPolicy) -> Self {
        Self {
            start,
            days,
            visitor,
            reload_each_day: false,
            reset_on: None,
            setup: None,
            expectations: Vec::new(),
        }
    }

    #[must_use]
    pub const fn reloading(mut self) -> Self {
        self.reload_each_day = true;
        self
    }

    #[must_use]
    pub const fn with_reset_on(mut self, day_index: u32) -> Self {
        self.reset_on = Some(day_index);
        self
    }

    #[must_use]
    pub fn with_setup(mut self, setup: StoreSetup) -> Self {
        self.setup = Some(setup);
        self
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: SimulationExpectation) -> Self {
        self.expectations.push(expectation);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub opened_today: Vec<u8>,
    pub rejected_clicks: usize,
    pub opened_total: usize,
    pub reset: bool,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub seed: u64,
    pub visitor: VisitorPolicy,
    pub initial_opened: Vec<u8>,
    pub initial_order: Vec<u8>,
    pub final_opened: Vec<u8>,
    pub final_order: Vec<u8>,
    pub days: Vec<DayRecord>,
    pub violations: Vec<String>,
}

impl SimulationSummary {
    #[must_use]
    pub fn resets(&self) -> usize {
        self.days.iter().filter(|d| d.reset).count()
    }

    #[must_use]
    pub fn day(&self, month: u32, day: u32) -> Option<&DayRecord> {
        self.days
            .iter()
            .find(|record| record.date.month() == month && record.date.day() == day)
    }
}

fn numbers(doors: impl Iterator<Item = Door>) -> Vec<u8> {
    doors.map(Door::number).collect()
}

fn to_calendar_date(date: NaiveDate) -> CalendarDate {
    CalendarDate::new(date.month(), date.day())
}

type SimCalendar = CalendarState<MemoryStore, FixedClock>;

/// Drives a calendar through a run of days and checks its invariants on the way.
#[derive(Debug, Clone)]
pub struct SeasonSimulator {
    year: i32,
    verbose: bool,
}

impl SeasonSimulator {
    #[must_use]
    pub const fn new(year: i32, verbose: bool) -> Self {
        Self { year, verbose }
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Run `plan` with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan's start date does not exist in the simulated year.
    pub fn run_plan(&self, plan: &SimulationPlan, seed: u64) -> Result<SimulationSummary> {
        let (month, day) = plan.start;
        let first = NaiveDate::from_ymd_opt(self.year, month, day).ok_or_else(|| {
            anyhow::anyhow!("{}-{month:02}-{day:02} is not a valid date", self.year)
        })?;

        let store = MemoryStore::new();
        if let Some(setup) = plan.setup {
            setup(&store);
        }

        let mut rng = ChaCha20Rng::seed_from_u64(seed ^ 0xA11C_E5ED);
        let mut calendar = SimCalendar::initialize(
            store.clone(),
            FixedClock(to_calendar_date(first)),
            seed,
        );
        let initial_opened = numbers(calendar.opened().iter());
        let initial_order = numbers(calendar.order().iter());
        let mut violations = Vec::new();
        let mut days = Vec::with_capacity(plan.days as usize);

        for (index, date) in (0..plan.days).zip(first.iter_days()) {
            let today = to_calendar_date(date);
            calendar = if plan.reload_each_day && index > 0 {
                SimCalendar::initialize(
                    store.clone(),
                    FixedClock(today),
                    seed.wrapping_add(u64::from(index)),
                )
            } else {
                calendar.with_clock(FixedClock(today))
            };

            let mut opened_today = Vec::new();
            let mut rejected_clicks = 0;
            for door in plan.visitor.clicks(today, &mut rng) {
                let was_open = calendar.is_open(door);
                let available = calendar.is_available(door);
                let before = calendar.opened().len();
                let changed = calendar.open(door);

                if changed {
                    opened_today.push(door.number());
                    if was_open || !available {
                        violations.push(format!(
                            "{date}: door {door} opened while {}",
                            if was_open { "already open" } else { "unavailable" }
                        ));
                    }
                } else {
                    rejected_clicks += 1;
                    if calendar.opened().len() != before {
                        violations.push(format!("{date}: rejected click on {door} changed state"));
                    }
                    if available && !was_open {
                        violations.push(format!("{date}: available door {door} did not open"));
                    }
                }
            }

            let reset = plan.reset_on == Some(index);
            if reset {
                calendar.reset();
                if !calendar.opened().is_empty() {
                    violations.push(format!("{date}: reset left doors open"));
                }
                if store.contains(OPENED_DOORS_KEY) {
                    violations.push(format!("{date}: reset kept the opened-doors record"));
                }
            }

            check_invariants(&store, &calendar, date, &mut violations);

            if self.verbose {
                log::info!(
                    "{date}: opened {opened_today:?}, rejected {rejected_clicks}, total {}",
                    calendar.opened().len()
                );
            }

            days.push(DayRecord {
                date,
                opened_today,
                rejected_clicks,
                opened_total: calendar.opened().len(),
                reset,
                status: calendar.status_message().to_string(),
            });
        }

        Ok(SimulationSummary {
            seed,
            visitor: plan.visitor,
            initial_opened,
            initial_order,
            final_opened: numbers(calendar.opened().iter()),
            final_order: numbers(calendar.order().iter()),
            days,
            violations,
        })
    }
}

fn check_invariants(
    store: &MemoryStore,
    calendar: &SimCalendar,
    date: NaiveDate,
    violations: &mut Vec<String>,
) {
    let mut sorted = numbers(calendar.order().iter());
    sorted.sort_unstable();
    if sorted != (1..=24).collect::<Vec<u8>>() {
        violations.push(format!("{date}: door order is not a permutation"));
    }

    match store.get(DOOR_ORDER_KEY).unwrap_or_default() {
        Some(raw) => match serde_json::from_str::<DoorOrder>(&raw) {
            Ok(stored) if &stored == calendar.order() => {}
            Ok(_) => violations.push(format!("{date}: stored order diverged from memory")),
            Err(err) => violations.push(format!("{date}: stored order unreadable: {err}")),
        },
        None => violations.push(format!("{date}: door order was never persisted")),
    }

    if !calendar.opened().is_empty() {
        let stored = store
            .get(OPENED_DOORS_KEY)
            .unwrap_or_default()
            .and_then(|raw| serde_json::from_str::<OpenedDoors>(&raw).ok());
        if stored.as_ref() != Some(calendar.opened()) {
            violations.push(format!("{date}: stored opened doors diverged from memory"));
        }
    }
}
