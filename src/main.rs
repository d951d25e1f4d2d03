//! Solo Leveling - Entry Point
//!
//! Headless driver: loads the player from a save slot, applies missions
//! and dungeon runs, and writes the result back.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use solo_leveling::data::{export_default_data, DataManager, DEFAULT_DATA_DIR};
use solo_leveling::items::{reserve_item_ids_through, LootForge};
use solo_leveling::player::{
    allocate_stat_point, apply_dungeon_rewards, complete_mission, PlayerState, Progress,
};
use solo_leveling::progression::{xp_progress, xp_to_next_rank, StatKind};
use solo_leveling::rewards::generate_rewards;
use solo_leveling::save;

#[derive(Parser, Debug)]
#[command(name = "solo-leveling", version, about = "Level up your real life")]
struct Cli {
    /// Save slot to use
    #[arg(long, default_value_t = 0)]
    slot: u8,

    /// Override the save directory
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Directory holding dungeons.ron and missions.ron
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the status window
    Status,
    /// List known dungeons
    Dungeons,
    /// List known missions
    Missions,
    /// Attempt a dungeon
    Raid {
        /// Dungeon ID
        dungeon: String,
        /// Record the attempt as a defeat
        #[arg(long)]
        defeat: bool,
        /// Seed the drop rolls for a reproducible result
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Complete a mission
    Mission {
        /// Mission ID
        mission: String,
    },
    /// Spend a stat point (str, agi, per, vit, int)
    Allocate {
        stat: StatKind,
    },
    /// Start a new hunter in the slot
    New {
        name: String,
    },
    /// Delete the save in the slot
    Reset,
    /// Write the built-in data files to the data directory
    ExportData,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    let cli = Cli::parse();
    let save_dir = cli.save_dir.clone().unwrap_or_else(save::default_save_dir);
    log::debug!("Using save directory {}", save_dir.display());

    match cli.command {
        Command::Status => {
            let player = load(&save_dir, cli.slot)?;
            print_status(&player);
        }
        Command::Dungeons => {
            let data = DataManager::load(&cli.data_dir);
            for d in &data.dungeons.dungeons {
                println!(
                    "{:<16} {:<18} lvl {:>3}  {:>5} xp  rare {:>3.0}%",
                    d.id, d.name, d.recommended_level, d.base_xp, d.rare_drop_rate * 100.0
                );
                if let Some(description) = &d.description {
                    println!("    {}", description);
                }
            }
        }
        Command::Missions => {
            let data = DataManager::load(&cli.data_dir);
            for m in &data.missions.missions {
                let bonus = m.stat_bonus
                    .map(|b| format!("+{} {}", b.amount, b.stat.short()))
                    .unwrap_or_default();
                println!("{:<12} {:<26} {:>4} xp  {}", m.id, m.title, m.xp_reward, bonus);
            }
        }
        Command::Raid { dungeon, defeat, seed } => {
            let data = DataManager::load(&cli.data_dir);
            let dungeon = data.dungeons.find(&dungeon)
                .ok_or_else(|| anyhow!("unknown dungeon '{}'", dungeon))?;
            let player = load(&save_dir, cli.slot)?;

            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            let victory = !defeat;
            let rewards = generate_rewards(dungeon, victory, player.level.level, &mut rng, &LootForge);

            if victory {
                println!("{} cleared!", dungeon.name);
            } else {
                println!("Defeated in {}.", dungeon.name);
            }
            println!("+{} XP", rewards.xp);
            for loot in &rewards.rewards {
                println!("  loot: {}", loot);
            }
            for item in &rewards.equipment {
                println!("  equipment: {}", item);
            }

            let (player, progress) = apply_dungeon_rewards(&player, &rewards, victory);
            report(&progress);
            save::save_player(&player, &save_dir, cli.slot)?;
        }
        Command::Mission { mission } => {
            let data = DataManager::load(&cli.data_dir);
            let mission = data.missions.find(&mission)
                .ok_or_else(|| anyhow!("unknown mission '{}'", mission))?;
            let player = load(&save_dir, cli.slot)?;

            let (player, progress) = complete_mission(&player, mission);
            println!("Mission complete: {} (+{} XP)", mission.title, mission.xp_reward);
            if let Some(bonus) = mission.stat_bonus {
                println!("  +{} {}", bonus.amount, bonus.stat);
            }
            report(&progress);
            save::save_player(&player, &save_dir, cli.slot)?;
        }
        Command::Allocate { stat } => {
            let player = load(&save_dir, cli.slot)?;
            let Some(player) = allocate_stat_point(&player, stat) else {
                bail!("no stat points to spend");
            };
            println!("{} is now {} ({} points left)", stat, player.stats.get(stat), player.stat_points);
            save::save_player(&player, &save_dir, cli.slot)?;
        }
        Command::New { name } => {
            if save::player_exists(&save_dir, cli.slot) {
                bail!("slot {} is taken; run `reset` first", cli.slot);
            }
            let player = PlayerState::new(&name);
            save::save_player(&player, &save_dir, cli.slot)?;
            println!("Welcome, {}. You have been chosen as a Player.", name);
        }
        Command::Reset => {
            save::delete_player(&save_dir, cli.slot)?;
            println!("Slot {} cleared", cli.slot);
        }
        Command::ExportData => {
            export_default_data(&cli.data_dir)?;
            println!("Wrote default data to {}", cli.data_dir.display());
        }
    }

    Ok(())
}

/// Load the slot's player and make sure new item IDs won't collide with it
fn load(save_dir: &std::path::Path, slot: u8) -> Result<PlayerState> {
    let player = save::load_player(save_dir, slot)
        .with_context(|| format!("loading slot {} (create one with `new <name>`)", slot))?;
    if let Some(max_id) = player.max_item_id() {
        reserve_item_ids_through(max_id);
    }
    Ok(player)
}

fn report(progress: &Progress) {
    if progress.leveled_up() {
        println!(
            "LEVEL UP! You are now level {}! (+{} stat points)",
            progress.new_level,
            progress.stat_points_earned()
        );
    }
    if progress.ranked_up() {
        println!("RANK UP! {} -> {}", progress.old_rank, progress.new_rank);
    }
}

fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0)) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

fn print_status(player: &PlayerState) {
    let level = player.level;
    let rank = player.rank();
    let effective = player.effective_stats();

    println!("Name:  {}", player.name);
    println!(
        "Level: {}  {} {}/{}",
        level.level,
        progress_bar(xp_progress(level.level, level.xp) as f64, 20),
        level.xp,
        level.xp_to_next()
    );
    match xp_to_next_rank(player.lifetime_xp) {
        Some(gap) => println!(
            "Rank:  {}  {} {:.0}% ({} xp to go)",
            rank,
            progress_bar(player.rank_progress() / 100.0, 20),
            player.rank_progress(),
            gap
        ),
        None => println!("Rank:  {} (max)", rank),
    }
    for &kind in StatKind::all() {
        let base = player.stats.get(kind);
        let bonus = effective.get(kind) - base;
        if bonus != 0 {
            println!("  {}: {} (+{})", kind.short(), base, bonus);
        } else {
            println!("  {}: {}", kind.short(), base);
        }
    }
    println!("Stat points: {}", player.stat_points);
    println!(
        "Missions: {}  Dungeons cleared: {}  failed: {}",
        player.completed_missions, player.dungeons_cleared, player.dungeons_failed
    );
    if !player.equipment.is_empty() {
        println!("Equipment:");
        for item in &player.equipment {
            println!("  {}", item);
        }
    }
}
