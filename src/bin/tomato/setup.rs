use std::sync::Arc;

use snafu::{prelude::*, Whatever};
use tomato_clock::config::{self, Configuration};
use tomato_clock::console::TerminalRenderer;
use tomato_clock::domain::entity::{CycleCount, IntervalDuration, NotificationMessage};
use tomato_clock::domain::outbound::{NotifyPort, RenderPort};
use tomato_clock::domain::timer::{Countdown, Sequencer, TimerConfig};
use tomato_clock::notify::{
    BeepNotifier, DesktopNotifier, NoOpNotifier, Notifier, NotifierStack, SpeechNotifier,
};

use crate::cli::Arguments;

const APP_NAME: &str = "tomato-clock";
const SPEECH_VOICE: &str = "Daniel";

pub fn bootstrap(args: &Arguments) -> Result<Sequencer, Whatever> {
    let configuration = configuration(args)?;
    let config = timer_config(args, &configuration)?;

    let renderer: Arc<dyn RenderPort> = Arc::new(TerminalRenderer::new());
    let countdown = Countdown::new(Arc::clone(&renderer));
    let notifier = notifier();

    Ok(Sequencer::new(config, countdown, notifier, renderer))
}

fn configuration(args: &Arguments) -> Result<Configuration, Whatever> {
    let res = match &args.config {
        Some(path) => config::load_with_path(path.clone()),
        None => config::load_with_xdg(APP_NAME.to_owned()),
    };

    res.whatever_context("Could not load configuration")
}

fn timer_config(args: &Arguments, configuration: &Configuration) -> Result<TimerConfig, Whatever> {
    let work = args.work.unwrap_or(configuration.duration.work);
    let rest = args.rest.unwrap_or(configuration.duration.rest);

    let work_duration =
        IntervalDuration::try_new(work).whatever_context("Invalid work interval")?;
    let break_duration =
        IntervalDuration::try_new(rest).whatever_context("Invalid break interval")?;
    let cycles = CycleCount::try_new(configuration.cycle.count)
        .whatever_context("Invalid cycle count")?;

    let work_section = &configuration.notification.work;
    let work_notification =
        NotificationMessage::try_new(work_section.summary.clone(), work_section.body.clone())
            .whatever_context("Invalid work notification message")?;

    let break_section = &configuration.notification.rest;
    let break_notification =
        NotificationMessage::try_new(break_section.summary.clone(), break_section.body.clone())
            .whatever_context("Invalid break notification message")?;

    Ok(TimerConfig {
        work_duration,
        break_duration,
        cycles,
        work_notification,
        break_notification,
    })
}

/// Compose the notification channels available on this platform. Channels
/// are selected once here; delivery through them is best-effort.
fn notifier() -> Arc<dyn NotifyPort> {
    let mut channels: Vec<Notifier> = Vec::new();

    if cfg!(target_os = "macos") {
        channels.push(DesktopNotifier::new(APP_NAME.to_owned()).into());
        channels.push(SpeechNotifier::new(SPEECH_VOICE.to_owned()).into());
    } else if cfg!(target_os = "linux") {
        channels.push(DesktopNotifier::new(APP_NAME.to_owned()).into());
        channels.push(BeepNotifier::new().into());
    } else {
        channels.push(NoOpNotifier.into());
    }

    Arc::new(NotifierStack::new(channels))
}
