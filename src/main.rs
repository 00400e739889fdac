use anyhow::Result;
use tracing::{info, warn};

use moodstyle::config::{discover_config, user_config_path};
use moodstyle::detection::{MockCamera, MoodDetector};
use moodstyle::routes::Route;
use moodstyle::share::MemoryClipboard;
use moodstyle::Session;

/// Headless walk through one session: detect a mood, browse picks for it,
/// preview the first one in 3D and print what a front end would render.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    moodstyle::init_tracing();

    let config = discover_config();
    if let Some(path) = user_config_path() {
        info!("User config location: {}", path.display());
    }

    let mut session = Session::new(config.clone());
    let mut detector = MoodDetector::from_config(&config.detection)?;
    let camera = MockCamera::new();

    let entry = session.detect_mood(&mut detector, &camera).await?;
    session.select_mood(entry.mood.clone());
    session.navigate(Route::TopPicks);

    let picks = session.recommendations();
    info!("{} picks for {}", picks.len(), entry.mood);

    if let Some(pick) = picks.first() {
        let viewer = session.open_viewer(&pick.id)?;
        viewer.tick(1.0 / 60.0);
        let frame = serde_json::json!({
            "details": viewer.details(),
            "camera": viewer.camera(),
            "eye": viewer.eye(),
            "scene": viewer.scene(0.0),
        });
        println!("{}", serde_json::to_string_pretty(&frame)?);
        session.close_viewer();
    }

    for row in session.leaderboard().iter().take(3) {
        info!("{} {}: {} orders, {:.2} spent ({})", row.emoji, row.mood, row.total_orders, row.total_spent, row.growth);
    }

    let clipboard = MemoryClipboard::new();
    if let Err(e) = session.share(&clipboard) {
        warn!("Share failed: {}", e);
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&session.store().snapshot())?
    );
    for toast in session.notifications().drain() {
        println!("[{:?}] {}", toast.kind, toast.message);
    }
    Ok(())
}
