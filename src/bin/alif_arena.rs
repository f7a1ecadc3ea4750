//! Terminal host for the arena.
//!
//! Usage: `alif-arena [config.json]`
//!
//! Reads `GEMINI_API_KEY` (and friends) from the environment or `.env`;
//! without a key the AI features fall back to their offline behavior.
//! `ALIF_ARENA_SEED` pins the random stream. Logging via `RUST_LOG`.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use alif_arena::app::{catalog, AppState, View};
use alif_arena::{AnyGateway, ArenaConfig, ContentGateway, FeedbackKind, GameRng};

type Input = Lines<BufReader<Stdin>>;

async fn read_line(input: &mut Input, prompt: &str) -> anyhow::Result<Option<String>> {
    println!("{prompt}");
    Ok(input.next_line().await?.map(|line| line.trim().to_string()))
}

fn load_config() -> anyhow::Result<ArenaConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
            ArenaConfig::from_json_str(&json).with_context(|| format!("Invalid config in {path}"))
        }
        None => Ok(ArenaConfig::default()),
    }
}

fn load_rng() -> anyhow::Result<GameRng> {
    match std::env::var("ALIF_ARENA_SEED") {
        Ok(seed) => {
            let seed = seed.parse().context("ALIF_ARENA_SEED must be an unsigned integer")?;
            Ok(GameRng::new(seed))
        }
        Err(_) => Ok(GameRng::from_entropy()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = load_config()?;
    let gateway = AnyGateway::from_env();
    let mut app = AppState::new(config, load_rng()?);
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("Alif Academy Kids!");
    if !gateway.is_online() {
        println!("(AI magic is offline)");
    }

    loop {
        let keep_going = match app.view() {
            View::Home => home(&mut app, &mut input).await?,
            View::Lessons => lessons(&mut app, &gateway, &mut input).await?,
            View::Games => games(&mut app, &gateway, &mut input).await?,
        };
        if !keep_going {
            break;
        }
    }

    Ok(())
}

async fn home(app: &mut AppState, input: &mut Input) -> anyhow::Result<bool> {
    let Some(line) = read_line(input, "\n1) Letter Labs  2) Team Arena  q) quit").await? else {
        return Ok(false);
    };
    match line.as_str() {
        "1" => app.open_lessons(),
        "2" => app.open_games(),
        "q" => return Ok(false),
        _ => {}
    }
    Ok(true)
}

async fn lessons(app: &mut AppState, gateway: &AnyGateway, input: &mut Input) -> anyhow::Result<bool> {
    println!("\nLetter Labs");
    for (i, card) in app.lessons().iter().enumerate() {
        let letter = card.letter();
        if card.is_flipped() {
            println!("{:>2}) {} {} = {}", i + 1, letter.glyph, letter.example_word, letter.example_translation);
        } else {
            println!("{:>2}) {} {} [{}]", i + 1, letter.glyph, letter.name, letter.transliteration);
        }
    }

    let Some(line) = read_line(input, "N) flip  mN) memory magic  sN) say it  b) back").await? else {
        return Ok(false);
    };
    if line == "b" {
        app.go_home();
        return Ok(true);
    }

    let (action, number) = match line.strip_prefix('m').or_else(|| line.strip_prefix('s')) {
        Some(rest) => (&line[..1], rest),
        None => ("", line.as_str()),
    };
    let Some(card) = number
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| app.lesson_mut(i))
    else {
        return Ok(true);
    };

    match action {
        "m" => {
            if let Some(text) = card.request_mnemonic(gateway).await {
                println!("✨ {text}");
            }
        }
        "s" => {
            if let Some(clip) = card.pronounce(gateway).await {
                println!("🔊 {:.1}s of audio", clip.duration().as_secs_f32());
                card.settle_pronunciation::<()>(Ok(()));
            }
        }
        _ => card.flip(),
    }
    Ok(true)
}

async fn games(app: &mut AppState, gateway: &impl ContentGateway, input: &mut Input) -> anyhow::Result<bool> {
    println!("\nBattle Grounds");
    let entries: Vec<_> = catalog::entries().collect();
    for (i, entry) in entries.iter().enumerate() {
        println!("{}) {} {} ({})", i + 1, entry.icon, entry.title, entry.description);
    }

    let Some(line) = read_line(input, "N) play  b) back").await? else {
        return Ok(false);
    };
    if line == "b" {
        app.go_home();
        return Ok(true);
    }
    let Some(entry) = line
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| entries.get(i))
    else {
        return Ok(true);
    };

    let active = app.start_game(entry.game, entry.mode, gateway).await;
    let session = &active.session;
    println!("\n== {} ==", active.entry.title);

    while session.result().is_none() {
        let state = session.snapshot();
        let team = &state.roster()[state.active_team()];
        let (round, total) = session.progress();
        println!("\n[{round}/{total}] {} ({} pts): find {}", team.name, team.score, session.prompt());

        let options = session.options();
        for (i, option) in options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }

        let Some(line) = read_line(input, "N) answer  q) quit mission").await? else {
            return Ok(false);
        };
        if line == "q" {
            break;
        }
        let Some(choice) = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i))
        else {
            continue;
        };

        if let Some(outcome) = session.submit_answer(choice) {
            match outcome.feedback {
                FeedbackKind::Correct => println!("✅ Correct! +10"),
                FeedbackKind::Wrong => println!("❌ It was {}", outcome.correct_answer),
            }
        }
        session.wait_released().await;
    }

    if let Some(result) = session.result() {
        println!("\n🏆 {}", result.headline());
        for team in &result.ranking {
            println!("  {}: {}", team.name, team.score);
        }
    }

    app.quit_game();
    Ok(true)
}
