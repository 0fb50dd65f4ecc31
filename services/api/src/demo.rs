use std::path::PathBuf;
use std::sync::Arc;

use bench_ai::error::AppError;
use bench_ai::workflows::roster::{
    BenchAlert, ClassifiedRoster, PlayerId, PolicyConfig, Position, ShiftBoardService,
    ShiftObservation, ShiftRecordView,
};
use bench_ai::workflows::toi::ToiReportImporter;
use clap::Args;

use crate::infra::InMemoryAlertPublisher;

#[derive(Args, Debug)]
pub(crate) struct RosterClassifyArgs {
    /// Path to a TOI report export (Player,Position,Shift_Sec,Ice_Rating)
    #[arg(long)]
    pub(crate) toi_csv: PathBuf,
    /// Print every classified row, not just the leaders
    #[arg(long)]
    pub(crate) full: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional TOI report export to classify instead of the bundled snapshot
    #[arg(long)]
    pub(crate) toi_csv: Option<PathBuf>,
    /// Skip the bench call listing at the end of the demo
    #[arg(long)]
    pub(crate) skip_alerts: bool,
}

pub(crate) fn run_roster_classify(args: RosterClassifyArgs) -> Result<(), AppError> {
    let observations = ToiReportImporter::from_path(&args.toi_csv)?;

    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let service = ShiftBoardService::new(alerts.clone(), PolicyConfig::default())?;
    let roster = service.classify_snapshot(observations)?;

    render_roster(&roster, &alerts.events(), args.full);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Shift board demo");

    let (observations, imported) = match args.toi_csv {
        Some(path) => (ToiReportImporter::from_path(path)?, true),
        None => (sample_snapshot(), false),
    };

    if imported {
        println!("Data source: TOI report import");
    } else {
        println!("Data source: bundled sample snapshot (no TOI report provided)");
    }

    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let policy = PolicyConfig::default();
    println!(
        "Policy: cliff {}s | turnover uplift {:.0}% | defenseman load x{:.2}",
        policy.cliff_threshold_seconds,
        policy.turnover_uplift * 100.0,
        policy.defenseman_fatigue_multiplier
    );

    let service = ShiftBoardService::new(alerts.clone(), policy)?;
    let roster = service.classify_snapshot(observations)?;

    render_roster(&roster, &alerts.events(), true);

    if args.skip_alerts {
        return Ok(());
    }

    let events = alerts.events();
    if events.is_empty() {
        println!("\nBench calls: none dispatched");
    } else {
        println!("\nBench calls");
        for alert in events {
            println!("  - {}", alert.message);
        }
    }

    Ok(())
}

fn render_roster(roster: &ClassifiedRoster, alerts: &[BenchAlert], full: bool) {
    let summary = &roster.summary;
    println!(
        "\nRoster of {}: {} exit now, {} maintain, {} bench call(s) dispatched",
        summary.roster_size,
        summary.exit_now,
        summary.maintain,
        alerts.len()
    );

    if let Some(top) = &summary.top_asset {
        println!("Top asset: {} (impact {:.2})", top.player_id, top.value);
    }
    if let Some(variance) = &summary.max_variance_asset {
        println!(
            "Max variance asset: {} (ice rating {:.2})",
            variance.player_id, variance.value
        );
    }
    if let Some(debt) = &summary.deepest_debt {
        println!("Deepest debt: {} ({}s)", debt.player_id, debt.res);
    }

    println!("\nAsset quality (impact, descending)");
    render_rows(&roster.by_impact, full);

    println!("\nUrgency (remaining effective seconds, ascending)");
    render_rows(&roster.by_urgency, full);
}

fn render_rows(views: &[ShiftRecordView], full: bool) {
    let shown = if full { views.len() } else { views.len().min(5) };
    for view in &views[..shown] {
        println!(
            "  {:<18} {:<10} shift {:>5.1}s | rating {:>7.2} | reward {:>7.2} | RES {:>4} | impact {:>6.2} | {}",
            view.player_id,
            view.position_label,
            view.shift_seconds,
            view.stability_score,
            view.reward,
            view.res,
            view.impact,
            view.decision_label
        );
    }
    if shown < views.len() {
        println!("  ... {} more row(s), pass --full for the complete table", views.len() - shown);
    }
}

/// The reference snapshot: eleven defensive-zone starts from one TOI report.
fn sample_snapshot() -> Vec<ShiftObservation> {
    let rows: [(&str, Position, f32, f32); 11] = [
        ("Adamson Mikey", Position::Defenseman, 63.0, -31.04),
        ("Trudeau Felix", Position::Defenseman, 63.0, -45.00),
        ("Joughin Marcus", Position::Forward, 59.0, -87.51),
        ("Pabich Reid", Position::Forward, 58.0, -60.40),
        ("Driscoll John", Position::Defenseman, 56.0, -88.37),
        ("VanRooyan Aiden", Position::Forward, 55.0, -34.50),
        ("Tardif Charles", Position::Forward, 52.0, -12.89),
        ("Galata Cole", Position::Defenseman, 52.0, -27.17),
        ("Rubin Michael", Position::Forward, 51.0, -22.97),
        ("Bongo Jake", Position::Defenseman, 47.0, -41.10),
        ("Levyy Vitaly", Position::Forward, 44.0, -28.20),
    ];

    rows.into_iter()
        .map(
            |(player, position, shift_seconds, stability_score)| ShiftObservation {
                player_id: PlayerId(player.to_string()),
                position,
                shift_seconds,
                stability_score,
            },
        )
        .collect()
}
