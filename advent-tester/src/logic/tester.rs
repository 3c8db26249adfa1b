use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;
use crate::logic::simulation::{SeasonSimulator, SimulationPlan, SimulationSummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: u64,
    pub successful_iterations: u64,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    /// Day-by-day record of the first iteration that failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_run: Option<SimulationSummary>,
}

#[derive(Default)]
struct IterationTally {
    successes: u64,
    failures: Vec<String>,
    durations: Vec<Duration>,
    failed_run: Option<SimulationSummary>,
}

pub struct LogicTester {
    simulator: SeasonSimulator,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(simulator: SeasonSimulator, verbose: bool) -> Self {
        Self { simulator, verbose }
    }

    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        seeds: &[u64],
        iterations: u64,
    ) -> Vec<ScenarioResult> {
        let mut results = Vec::new();

        for &seed in seeds {
            if self.verbose {
                println!(
                    "🧪 Testing scenario: {} (visitor: {} seed: {} year: {})",
                    scenario.name.bright_white(),
                    scenario.plan.visitor.label(),
                    seed,
                    self.simulator.year()
                );
            }

            results.push(self.run_single_scenario(scenario, seed, iterations));
        }

        results
    }

    fn run_single_scenario(
        &self,
        scenario: &TestScenario,
        seed: u64,
        iterations: u64,
    ) -> ScenarioResult {
        let tally = self.run_simulation_iterations(&scenario.plan, seed, iterations);

        let avg_duration = if tally.durations.is_empty() {
            Duration::ZERO
        } else {
            tally.durations.iter().sum::<Duration>()
                / u32::try_from(tally.durations.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.clone(),
            seed,
            passed: tally.successes > 0 && tally.failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: tally.successes,
            failures: tally.failures,
            average_duration: avg_duration,
            failed_run: tally.failed_run,
        }
    }

    fn run_simulation_iterations(
        &self,
        plan: &SimulationPlan,
        seed: u64,
        iterations: u64,
    ) -> IterationTally {
        let mut tally = IterationTally::default();

        for i in 0..iterations {
            let start_time = Instant::now();
            let iteration_seed = seed.wrapping_add(i);

            let outcome = match self.simulator.run_plan(plan, iteration_seed) {
                Err(err) => Err((err.to_string(), None)),
                Ok(summary) => match evaluate(plan, &summary) {
                    Some(err) => Err((
                        format!(
                            "{err} | opened {:?} | resets {}",
                            summary.final_opened,
                            summary.resets()
                        ),
                        Some(summary),
                    )),
                    None => Ok(summary),
                },
            };

            match outcome {
                Ok(summary) => {
                    tally.successes += 1;
                    let duration = start_time.elapsed();
                    tally.durations.push(duration);
                    if self.verbose {
                        println!(
                            "  ✅ Iteration {}/{} passed ({duration:?}) days:{} opened:{}",
                            i + 1,
                            iterations,
                            summary.days.len(),
                            summary.final_opened.len()
                        );
                    }
                }
                Err((err, summary)) => {
                    let message = format!(
                        "Iteration {} (visitor {}, seed {iteration_seed}): {err}",
                        i + 1,
                        plan.visitor.label()
                    );
                    if self.verbose {
                        println!("  ❌ {}", message.clone().red());
                    }
                    tally.failures.push(message);
                    if tally.failed_run.is_none() {
                        tally.failed_run = summary;
                    }
                }
            }
        }

        tally
    }
}

/// First invariant violation or failed expectation, if any.
fn evaluate(plan: &SimulationPlan, summary: &SimulationSummary) -> Option<String> {
    if let Some(first) = summary.violations.first() {
        let extra = summary.violations.len() - 1;
        return Some(if extra == 0 {
            first.clone()
        } else {
            format!("{first} (+{extra} more violations)")
        });
    }
    plan.expectations
        .iter()
        .find_map(|expectation| expectation(summary).err().map(|err| err.to_string()))
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        u64::try_from(duration.as_micros())
            .unwrap_or(u64::MAX)
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Duration::from_micros(u64::deserialize(deserializer)?))
    }
}
