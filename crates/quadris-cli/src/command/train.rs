use std::path::PathBuf;

use chrono::Utc;
use rand::Rng as _;

use quadris_agent::{AgentConfig, QLearningAgent};
use quadris_engine::Seed;
use quadris_training::{EpisodeReport, ProgressSink, Trainer, TrainerConfig};

use crate::model::TrainedModel;

const DEFAULT_EPISODES: usize = 10_000;
const DEFAULT_REPORT_INTERVAL: usize = 100;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Number of training episodes to run
    #[arg(long, default_value_t = DEFAULT_EPISODES)]
    episodes: usize,
    /// Report progress every this many episodes
    #[arg(long, default_value_t = DEFAULT_REPORT_INTERVAL)]
    report_interval: usize,
    /// Exploration probability ε
    #[arg(long, default_value_t = AgentConfig::default().epsilon)]
    epsilon: f64,
    /// Learning rate α
    #[arg(long, default_value_t = AgentConfig::default().alpha)]
    alpha: f64,
    /// Discount factor γ
    #[arg(long, default_value_t = AgentConfig::default().gamma)]
    gamma: f64,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Default for TrainArg {
    fn default() -> Self {
        let AgentConfig {
            epsilon,
            alpha,
            gamma,
        } = AgentConfig::default();
        Self {
            episodes: DEFAULT_EPISODES,
            report_interval: DEFAULT_REPORT_INTERVAL,
            epsilon,
            alpha,
            gamma,
            output: None,
        }
    }
}

/// Forwards progress reports to stderr.
#[derive(Debug, Default, Clone, Copy)]
struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn report(&mut self, report: &EpisodeReport) {
        eprintln!(
            "Episode {}, Score: {}, Total Reward: {:.1}",
            report.episode, report.score, report.total_reward
        );
    }
}

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let TrainArg {
        episodes,
        report_interval,
        epsilon,
        alpha,
        gamma,
        output,
    } = arg;

    let agent_seed: Seed = rand::rng().random();
    let trainer_seed: Seed = rand::rng().random();

    let mut agent = QLearningAgent::with_seed(
        AgentConfig {
            epsilon: *epsilon,
            alpha: *alpha,
            gamma: *gamma,
        },
        agent_seed,
    );
    let mut trainer = Trainer::with_seed(
        TrainerConfig {
            episodes: *episodes,
            report_interval: *report_interval,
        },
        trainer_seed,
    );

    let summary = trainer.train(&mut agent, &mut ConsoleSink);
    eprintln!("Training completed.");

    let model = TrainedModel {
        trained_at: Utc::now(),
        episodes: summary.episodes,
        agent_seed,
        trainer_seed,
        epsilon: *epsilon,
        alpha: *alpha,
        gamma: *gamma,
        final_score: summary.final_score,
        best_score: summary.best_score,
        visited_states: summary.visited_states,
    };
    model.save(output.as_deref())?;

    eprintln!();
    eprintln!("Model saved successfully");
    if let Some(path) = output {
        eprintln!("  Path: {}", path.display());
    }
    eprintln!("  Trained at: {}", model.trained_at);
    eprintln!("  Final score: {}", model.final_score);
    eprintln!("  Best score: {}", model.best_score);
    eprintln!("  Visited states: {}", model.visited_states);

    Ok(())
}
