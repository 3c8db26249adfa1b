pub mod catalog;

use crate::logic::SimulationPlan;
use catalog::catalog_scenarios;

#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub plan: SimulationPlan,
}

impl TestScenario {
    #[must_use]
    pub fn simulation(name: impl Into<String>, plan: SimulationPlan) -> Self {
        Self {
            name: name.into(),
            plan,
        }
    }
}

/// Look up a scenario by CLI key. Keys are case-insensitive.
pub fn get_scenario(name: &str) -> Option<TestScenario> {
    let key = name.to_lowercase();
    catalog_scenarios()
        .into_iter()
        .find(|entry| entry.key == key || entry.aliases.contains(&key.as_str()))
        .map(|entry| TestScenario::simulation(entry.title, entry.plan))
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog_scenarios()
        .into_iter()
        .map(|entry| (entry.key, entry.title))
        .collect()
}
