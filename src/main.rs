mod autopilot;
mod config;

use crate::autopilot::Autopilot;
use crate::config::AppConfig;
use engine::{MatchEngine, MatchEvent, MatchPhase, MatchScheduler, MatchSnapshot, ThreadRandom};
use env_logger::Env;
use log::{debug, info};
use std::time::Duration;
use tokio::time::{interval, Instant, MissedTickBehavior};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let config = AppConfig::from_env()?;

    if config.is_one_shot_game {
        info!("one shot game started");
    }

    let settings = config.settings();
    let frame = Duration::from_millis(settings.simulation_tick_ms);

    let mut engine = MatchEngine::new(settings, config.orientation);
    engine.enable_logging();

    let mut scheduler = MatchScheduler::new(&engine);
    let mut autopilot = Autopilot::new(Box::new(ThreadRandom), config.is_one_shot_game);

    engine.start_match();
    log_events(&mut engine);

    let mut ticker = interval(frame);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut last_frame = Instant::now();

    loop {
        ticker.tick().await;

        let now = Instant::now();
        let dt_ms = config.scaled_ms(now.duration_since(last_frame));
        last_frame = now;

        scheduler.advance(&mut engine, dt_ms);
        log_events(&mut engine);

        if engine.phase() == MatchPhase::Ended {
            scheduler.stop();
            break;
        }

        autopilot.act(&mut engine, dt_ms);
        log_events(&mut engine);
    }

    let snapshot = MatchSnapshot::from(&engine);
    debug!("final snapshot: {:?}", snapshot);

    let result = engine.result();

    info!(
        "match finished: humans {} : robots {} ({} ticks)",
        result.score.offense, result.score.defense, result.ticks_played
    );

    match result.winner {
        Some(side) => info!("winner: {}", side.team_name()),
        None => info!("draw"),
    }

    for detail in &result.score.details {
        info!(
            "touchdown {} by {} in period {} with {}s left",
            detail.side.team_name(),
            detail.player_id,
            detail.period,
            detail.seconds_remaining
        );
    }

    Ok(())
}

fn log_events(engine: &mut MatchEngine) {
    for event in engine.take_events() {
        match event {
            MatchEvent::Possession(ball_event) => debug!("event: {:?}", ball_event),
            other => info!("event: {:?}", other),
        }
    }
}
