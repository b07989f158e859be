//! Immediate-mode drawing of the simulation snapshot: map viewport,
//! entities, HUD panel, message log, minimap, and phase overlays.

use macroquad::prelude::*;
use virion_core::{Game, Phase, Pos, TileKind, Tone};

use crate::app_loop::AppScreen;

pub const VIEW_TILES_X: i32 = 44;
pub const VIEW_TILES_Y: i32 = 22;
const TILE_PIXELS: f32 = 24.0;
const PANEL_HEIGHT: f32 = 170.0;
const LOG_LINES: usize = 6;

/// Top-left map tile of the viewport, clamped so the camera never shows
/// space beyond the grid.
pub fn camera_origin(player: Pos, map_width: i32, map_height: i32) -> Pos {
    let x = (player.x - VIEW_TILES_X / 2).clamp(0, (map_width - VIEW_TILES_X).max(0));
    let y = (player.y - VIEW_TILES_Y / 2).clamp(0, (map_height - VIEW_TILES_Y).max(0));
    Pos { y, x }
}

fn rgb(color: (u8, u8, u8)) -> Color {
    Color::from_rgba(color.0, color.1, color.2, 255)
}

fn dimmed(color: Color) -> Color {
    Color::new(color.r * 0.35, color.g * 0.35, color.b * 0.35, 1.0)
}

fn tile_color(kind: TileKind) -> Color {
    match kind {
        TileKind::Wall => Color::from_rgba(70, 70, 90, 255),
        TileKind::Floor => Color::from_rgba(28, 24, 34, 255),
        TileKind::BloodVessel => Color::from_rgba(110, 28, 28, 255),
        TileKind::Exit => Color::from_rgba(40, 160, 60, 255),
    }
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Info => WHITE,
        Tone::Good => Color::from_rgba(50, 200, 50, 255),
        Tone::Bad => Color::from_rgba(220, 50, 50, 255),
        Tone::Alert => Color::from_rgba(220, 200, 50, 255),
        Tone::Hazard => Color::from_rgba(220, 150, 50, 255),
        Tone::Flavor => Color::from_rgba(50, 200, 200, 255),
    }
}

pub fn draw(game: &Game, screen: AppScreen) {
    clear_background(BLACK);
    if screen == AppScreen::Menu {
        draw_menu();
        return;
    }

    let camera = camera_origin(
        game.state().player().pos,
        game.state().level.width as i32,
        game.state().level.height as i32,
    );
    draw_map(game, camera);
    draw_entities(game, camera);
    draw_panel(game);
    draw_minimap(game);
    draw_overlay(game);
}

fn draw_menu() {
    let center_x = screen_width() / 2.0;
    draw_text("V I R I O N", center_x - 120.0, 180.0, 56.0, GREEN);
    draw_text("Infiltrate the organism, level by level.", center_x - 190.0, 240.0, 24.0, GRAY);
    draw_text("Enter - start a run", center_x - 100.0, 320.0, 24.0, WHITE);
    draw_text("Esc   - quit", center_x - 100.0, 350.0, 24.0, WHITE);
}

fn draw_map(game: &Game, camera: Pos) {
    let level = &game.state().level;
    for view_y in 0..VIEW_TILES_Y {
        for view_x in 0..VIEW_TILES_X {
            let pos = Pos { y: camera.y + view_y, x: camera.x + view_x };
            if !level.in_bounds(pos) {
                continue;
            }
            let base = tile_color(level.tile_at(pos));
            let color = if level.is_visible(pos) {
                base
            } else if level.is_explored(pos) {
                dimmed(base)
            } else {
                continue;
            };
            draw_rectangle(
                view_x as f32 * TILE_PIXELS,
                view_y as f32 * TILE_PIXELS,
                TILE_PIXELS - 1.0,
                TILE_PIXELS - 1.0,
                color,
            );
        }
    }

    for zone in &level.damage_zones {
        if level.is_visible(zone.pos) {
            let (view_x, view_y) = (zone.pos.x - camera.x, zone.pos.y - camera.y);
            if (0..VIEW_TILES_X).contains(&view_x) && (0..VIEW_TILES_Y).contains(&view_y) {
                draw_rectangle(
                    view_x as f32 * TILE_PIXELS,
                    view_y as f32 * TILE_PIXELS,
                    TILE_PIXELS - 1.0,
                    TILE_PIXELS - 1.0,
                    Color::new(0.9, 0.5, 0.1, 0.35),
                );
            }
        }
    }
}

fn draw_entities(game: &Game, camera: Pos) {
    let level = &game.state().level;
    for actor in game.state().actors.values() {
        if !actor.alive || !level.is_visible(actor.pos) {
            continue;
        }
        let (view_x, view_y) = (actor.pos.x - camera.x, actor.pos.y - camera.y);
        if !(0..VIEW_TILES_X).contains(&view_x) || !(0..VIEW_TILES_Y).contains(&view_y) {
            continue;
        }
        let px = view_x as f32 * TILE_PIXELS;
        let py = view_y as f32 * TILE_PIXELS;
        draw_text(
            &actor.glyph.to_string(),
            px + 5.0,
            py + TILE_PIXELS - 6.0,
            TILE_PIXELS,
            rgb(actor.color),
        );
        // Health sliver above everyone who has taken a scratch.
        if actor.stats.hp < actor.stats.max_hp {
            draw_rectangle(px, py, (TILE_PIXELS - 1.0) * actor.hp_ratio(), 3.0, RED);
        }
    }
}

fn draw_panel(game: &Game) {
    let top = screen_height() - PANEL_HEIGHT;
    draw_rectangle(0.0, top, screen_width(), PANEL_HEIGHT, Color::from_rgba(16, 16, 22, 255));

    let player = game.state().player();
    let resources = game.state().resources;
    let stats_line = format!(
        "HP {}/{}   ATK {}   DEF {}   Level {}   Turn {}",
        player.stats.hp,
        player.stats.max_hp,
        player.stats.attack,
        player.stats.defense,
        game.state().level_index,
        game.state().turn_count,
    );
    draw_text(&stats_line, 12.0, top + 24.0, 22.0, WHITE);

    let resource_line = format!(
        "ATP {}/{}   Protein {}/{}   RNA {}/{}   Enemies {}   Clones {}",
        resources.atp,
        resources.max_atp,
        resources.protein,
        resources.max_protein,
        resources.rna,
        resources.max_rna,
        game.state().living_hostile_count(),
        game.state().clone_ids.len(),
    );
    draw_text(&resource_line, 12.0, top + 48.0, 22.0, SKYBLUE);

    for (line, message) in game.log().recent(LOG_LINES).enumerate() {
        draw_text(
            &message.text,
            12.0,
            top + 72.0 + line as f32 * 16.0,
            16.0,
            tone_color(message.tone),
        );
    }
}

fn draw_minimap(game: &Game) {
    let level = &game.state().level;
    let scale = 3.0;
    let origin_x = screen_width() - level.width as f32 * scale - 10.0;
    let origin_y = 10.0;

    draw_rectangle(
        origin_x - 2.0,
        origin_y - 2.0,
        level.width as f32 * scale + 4.0,
        level.height as f32 * scale + 4.0,
        Color::from_rgba(10, 10, 14, 220),
    );
    for room in &level.rooms {
        draw_rectangle(
            origin_x + room.x as f32 * scale,
            origin_y + room.y as f32 * scale,
            room.width as f32 * scale,
            room.height as f32 * scale,
            Color::from_rgba(60, 60, 80, 255),
        );
    }
    if let Some(exit) = level.exit_pos {
        draw_rectangle(
            origin_x + exit.x as f32 * scale,
            origin_y + exit.y as f32 * scale,
            scale,
            scale,
            GREEN,
        );
    }
    let player = game.state().player().pos;
    draw_rectangle(
        origin_x + player.x as f32 * scale,
        origin_y + player.y as f32 * scale,
        scale,
        scale,
        WHITE,
    );
}

fn draw_overlay(game: &Game) {
    match game.phase() {
        Phase::LevelUp => {
            shade();
            draw_text("EVOLUTION", 80.0, 120.0, 40.0, YELLOW);
            for (index, mutation) in game.offered_mutations().iter().enumerate() {
                let line = format!("{}. {} - {}", index + 1, mutation.name, mutation.description);
                draw_text(&line, 80.0, 170.0 + index as f32 * 30.0, 26.0, WHITE);
            }
        }
        Phase::Paused => {
            shade();
            draw_text("PAUSED", 80.0, 120.0, 40.0, WHITE);
            draw_text("Esc - resume   Q - menu", 80.0, 170.0, 26.0, GRAY);
        }
        Phase::GameOver => {
            shade();
            draw_text("THE INFECTION WAS CONTAINED", 80.0, 120.0, 40.0, RED);
            draw_text("R - retry   Q - menu", 80.0, 170.0, 26.0, GRAY);
        }
        Phase::Victory => {
            shade();
            draw_text("THE ORGANISM IS YOURS", 80.0, 120.0, 40.0, GREEN);
            draw_text("R - play again   Q - menu", 80.0, 170.0, 26.0, GRAY);
        }
        Phase::PlayerTurn | Phase::EnemyTurn => {}
    }
}

fn shade() {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.6));
}
