use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;
use tracing::{info, warn};

use jumpscroll_core::{AppConfig, Axis, EasingType, JumpConfig};
use jumpscroll_engine::host::headless::Commit;
use jumpscroll_engine::{
    FrameDriver, JumpConfigExt, JumpOptions, Jumper, ManualScheduler, Target,
};

use crate::scene::Scene;

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Scene file describing the viewport and elements (built-in demo article if omitted)
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Numeric target: a delta from the current offset, or absolute with --exact
    #[arg(long, allow_hyphen_values = true, conflicts_with = "element")]
    pub to: Option<f64>,

    /// Selector of the element to scroll to (e.g. "#faq")
    #[arg(short, long)]
    pub element: Option<String>,

    /// Treat --to as an absolute offset
    #[arg(long, conflicts_with = "no_exact")]
    pub exact: bool,

    /// Treat --to as a delta even if the config enables exact offsets
    #[arg(long)]
    pub no_exact: bool,

    /// Axis to scroll along (x or y)
    #[arg(long)]
    pub axis: Option<Axis>,

    /// Pixel adjustment added to the stop position
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<f64>,

    /// Run length in milliseconds
    #[arg(short, long)]
    pub duration: Option<f64>,

    /// Easing curve (none, linear, quad_in_out, cubic, quintic, ease_out)
    #[arg(long)]
    pub easing: Option<EasingType>,

    /// Focus the target element when the run completes
    #[arg(long, conflicts_with = "no_a11y")]
    pub a11y: bool,

    /// Leave focus alone even if the config enables a11y
    #[arg(long)]
    pub no_a11y: bool,

    /// Selector of the scroll container (the viewport if omitted)
    #[arg(short, long)]
    pub container: Option<String>,

    /// Print committed frames as JSON lines
    #[arg(long)]
    pub json: bool,
}

/// One committed scroll write
#[derive(Debug, Serialize)]
pub struct FrameRecord {
    pub index: usize,
    pub surface: String,
    pub axis: Axis,
    pub offset: f64,
}

/// Outcome of a finished run
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub start: f64,
    pub stop: f64,
    pub distance: f64,
    pub duration_ms: f64,
    pub frames: u64,
    pub commits: Vec<FrameRecord>,
    pub focused: Option<String>,
    pub completed: bool,
}

/// Configured jump defaults with command-line overrides applied
pub fn effective_config(base: &JumpConfig, args: &RunArgs) -> JumpConfig {
    let mut config = base.clone();
    if let Some(axis) = args.axis {
        config.axis = axis;
    }
    if let Some(duration) = args.duration {
        config.duration_ms = duration;
    }
    if let Some(offset) = args.offset {
        config.offset = offset;
    }
    if let Some(easing) = args.easing {
        config.easing = easing;
    }
    if args.a11y || args.no_a11y {
        config.a11y = args.a11y;
    }
    if args.exact || args.no_exact {
        config.exact = args.exact;
    }
    config
}

fn target_from(args: &RunArgs) -> Result<Target> {
    match (&args.element, args.to) {
        (Some(selector), _) => Ok(Target::from(selector.as_str())),
        (None, Some(offset)) => Ok(Target::from(offset)),
        (None, None) => bail!("Nothing to jump to: pass --to <offset> or --element <selector>"),
    }
}

fn record(index: usize, commit: Commit, axis: Axis) -> FrameRecord {
    match commit {
        Commit::Viewport { x, y } => FrameRecord {
            index,
            surface: "viewport".to_string(),
            axis,
            offset: if axis == Axis::X { x } else { y },
        },
        Commit::Element { id, axis, value } => FrameRecord {
            index,
            surface: format!("#{}", id),
            axis,
            offset: value,
        },
    }
}

/// Run a jump against the scene in real time and collect what it committed
pub async fn execute(config: &AppConfig, args: &RunArgs) -> Result<RunReport> {
    let scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::demo()?,
    };
    let doc = scene.build()?;

    let jump_config = effective_config(&config.jump, args);
    if !jump_config.is_animated() {
        warn!("Jump is not animated; it will land on the first frame");
    }

    let frames = Rc::new(ManualScheduler::new());
    let driver = FrameDriver::new(Rc::clone(&frames), jump_config.frame_interval());
    let jumper = Jumper::new(Rc::new(doc.clone()), driver.scheduler());

    let target = target_from(args)?;
    let mut options = JumpOptions::from_config(&jump_config);
    if let Some(container) = &args.container {
        options = options.container(container.as_str());
    }

    let plan = jumper.plan(target.clone(), &options)?;
    info!(
        start = plan.start,
        stop = plan.stop,
        distance = plan.distance,
        duration_ms = plan.duration,
        "Starting jump"
    );

    let completed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&completed);
    jumper.jump(target, options.on_complete(move || flag.set(true)))?;

    let delivered = driver.run_until_idle().await;
    info!(frames = delivered, duration_ms = plan.duration, "Jump finished");

    let commits = doc
        .commits()
        .into_iter()
        .enumerate()
        .map(|(index, commit)| record(index, commit, jump_config.axis))
        .collect();

    Ok(RunReport {
        start: plan.start,
        stop: plan.stop,
        distance: plan.distance,
        duration_ms: plan.duration,
        frames: delivered,
        commits,
        focused: doc.focused(),
        completed: completed.get(),
    })
}

pub async fn run(config: &AppConfig, args: RunArgs) -> Result<()> {
    let report = execute(config, &args).await?;

    if args.json {
        for frame in &report.commits {
            println!("{}", serde_json::to_string(frame)?);
        }
        return Ok(());
    }

    println!(
        "Jump {:.1} -> {:.1} (distance {:.1}) over {:.0}ms",
        report.start, report.stop, report.distance, report.duration_ms
    );
    for frame in &report.commits {
        println!(
            "  [{:>3}] {} {:?} = {:.2}",
            frame.index, frame.surface, frame.axis, frame.offset
        );
    }
    println!("Frames delivered: {}", report.frames);
    if let Some(focused) = &report.focused {
        println!("Focused: #{}", focused);
    }
    if report.completed {
        println!("Completed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_config_overrides() {
        let base = JumpConfig::default();
        let args = RunArgs {
            axis: Some(Axis::X),
            duration: Some(300.0),
            offset: Some(-12.0),
            easing: Some(EasingType::Linear),
            exact: true,
            ..Default::default()
        };
        let config = effective_config(&base, &args);
        assert_eq!(config.axis, Axis::X);
        assert_eq!(config.duration_ms, 300.0);
        assert_eq!(config.offset, -12.0);
        assert_eq!(config.easing, EasingType::Linear);
        assert!(config.exact);
        assert!(!config.a11y);
        assert_eq!(config.frame_rate, base.frame_rate);
    }

    #[test]
    fn test_configured_flags_kept_unless_negated() {
        let base = JumpConfig {
            a11y: true,
            exact: true,
            ..Default::default()
        };
        let config = effective_config(&base, &RunArgs::default());
        assert!(config.a11y);
        assert!(config.exact);

        let args = RunArgs {
            no_a11y: true,
            no_exact: true,
            ..Default::default()
        };
        let config = effective_config(&base, &args);
        assert!(!config.a11y);
        assert!(!config.exact);
    }

    #[test]
    fn test_negating_flags_conflict_with_enabling_ones() {
        use clap::Parser;

        #[derive(Parser)]
        struct Harness {
            #[command(flatten)]
            run: RunArgs,
        }

        assert!(Harness::try_parse_from(["run", "--to", "5", "--a11y", "--no-a11y"]).is_err());
        assert!(Harness::try_parse_from(["run", "--to", "5", "--exact", "--no-exact"]).is_err());
        let parsed = Harness::try_parse_from(["run", "--to", "5", "--no-exact"]).unwrap();
        assert!(parsed.run.no_exact);
    }

    #[test]
    fn test_target_requires_something() {
        assert!(target_from(&RunArgs::default()).is_err());
        let args = RunArgs {
            to: Some(-40.0),
            ..Default::default()
        };
        assert!(matches!(target_from(&args).unwrap(), Target::Offset(v) if v == -40.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_element_jump_on_demo_scene() {
        let args = RunArgs {
            element: Some("#faq".to_string()),
            a11y: true,
            duration: Some(200.0),
            ..Default::default()
        };
        let report = execute(&AppConfig::default(), &args).await.unwrap();

        assert_eq!(report.stop, 4400.0);
        assert!(report.completed);
        assert_eq!(report.focused.as_deref(), Some("faq"));
        let last = report.commits.last().unwrap();
        assert_eq!(last.surface, "viewport");
        assert_eq!(last.offset, 4400.0);
        assert!(report.frames >= 13);
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_inside_container() {
        let args = RunArgs {
            element: Some("#toc-faq".to_string()),
            container: Some("#toc".to_string()),
            duration: Some(100.0),
            ..Default::default()
        };
        let report = execute(&AppConfig::default(), &args).await.unwrap();

        // toc-faq sits 1400px below the top of #toc
        assert_eq!(report.stop, 1400.0);
        let last = report.commits.last().unwrap();
        assert_eq!(last.surface, "#toc");
        assert_eq!(last.offset, 1400.0);
        assert_eq!(report.focused, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_high_frame_rate() {
        let mut config = AppConfig::default();
        config.jump.frame_rate = 2000;
        let args = RunArgs {
            to: Some(100.0),
            duration: Some(20.0),
            ..Default::default()
        };
        let report = execute(&config, &args).await.unwrap();

        assert!(report.completed);
        assert_eq!(report.commits.last().unwrap().offset, 100.0);
        assert!(report.frames >= 20);
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_infinite_duration_with_logging_enabled() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let args = RunArgs {
            to: Some(100.0),
            duration: Some(f64::INFINITY),
            ..Default::default()
        };
        let report = execute(&AppConfig::default(), &args).await.unwrap();

        assert_eq!(report.duration_ms, 1000.0);
        assert!(report.completed);
        assert_eq!(report.commits.last().unwrap().offset, 100.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_unknown_element_fails() {
        let args = RunArgs {
            element: Some("#missing".to_string()),
            ..Default::default()
        };
        assert!(execute(&AppConfig::default(), &args).await.is_err());
    }
}
