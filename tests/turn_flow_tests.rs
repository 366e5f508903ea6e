//! Turn Flow Integration Tests
//!
//! Drives the computer turn phase machine and the action handlers through a
//! headless Bevy app with manually advanced time:
//! - Thinking/animation walk returns to Idle with exactly one move applied
//! - Stale animation commits are dropped after invalidation
//! - Undo/redo requests are frozen while a promotion prompt is open

use std::time::Duration;

use bevy::prelude::*;
use clickchess::core::GameSettings;
use clickchess::game::events::{RedoRequested, UndoRequested};
use clickchess::game::resources::{
    AiTurn, BoardView, ChosenMove, MoveLog, PendingPromotion, Players, RedoStack, Selection,
};
use clickchess::game::systems::actions::{handle_redo_requested, handle_undo_requested};
use clickchess::game::systems::ai::{ai_commit_system, ai_turn_system};
use clickchess::game::systems::animation::animate_glyphs;
use clickchess::rules::RulesEngine;
use shakmaty::{Color, Square};

fn turn_app(human: Color) -> App {
    let mut app = App::new();
    app.insert_resource(Time::<()>::default());
    app.init_resource::<RulesEngine>();
    app.init_resource::<Selection>();
    app.init_resource::<MoveLog>();
    app.init_resource::<RedoStack>();
    app.init_resource::<AiTurn>();
    app.init_resource::<BoardView>();
    app.init_resource::<PendingPromotion>();
    app.insert_resource(Players {
        human,
        ai: human.other(),
    });
    app.insert_resource(GameSettings {
        ai_think_seconds: 0.2,
        move_anim_seconds: 0.1,
        threat_overlay_default: false,
    });
    app.add_systems(
        Update,
        (ai_commit_system, ai_turn_system, animate_glyphs).chain(),
    );
    app
}

fn advance(app: &mut App, seconds: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(seconds));
    app.update();
}

// ============================================================================
// Computer Turn Phase Machine
// ============================================================================

#[test]
fn test_automated_turn_eventually_idles_with_exactly_one_move() {
    // computer opens as White
    let mut app = turn_app(Color::Black);

    app.update();
    assert!(
        app.world().resource::<AiTurn>().is_busy(),
        "thinking should begin on the computer's turn"
    );
    assert!(app.world().resource::<MoveLog>().is_empty());

    // well past think delay + animation duration
    for _ in 0..10 {
        advance(&mut app, 0.1);
    }

    assert_eq!(
        app.world().resource::<MoveLog>().len(),
        1,
        "exactly one move within the think+animation window"
    );
    assert!(!app.world().resource::<AiTurn>().is_busy());
    let engine = app.world().resource::<RulesEngine>();
    assert_eq!(engine.turn(), Color::Black);
    assert_eq!(engine.history_len(), 1);
}

#[test]
fn test_stale_animation_commit_is_dropped() {
    // human holds White, so the phase machine stays quiet on its own
    let mut app = turn_app(Color::White);
    {
        let mut ai = app.world_mut().resource_mut::<AiTurn>();
        ai.start_animating(ChosenMove {
            from: Square::E7,
            to: Square::E5,
            promotion: None,
        });
        // a reset or undo between scheduling and commit bumps the generation
        let stale = ai.generation.wrapping_add(1);
        ai.generation = stale;
    }

    app.update();

    assert!(!app.world().resource::<AiTurn>().is_busy());
    assert!(
        app.world().resource::<MoveLog>().is_empty(),
        "a commit staged under an old generation must be discarded"
    );
    let engine = app.world().resource::<RulesEngine>();
    assert_eq!(engine.turn(), Color::White);
    assert_eq!(engine.history_len(), 0);
}

#[test]
fn test_matching_generation_commit_lands() {
    let mut app = turn_app(Color::Black);
    {
        let mut ai = app.world_mut().resource_mut::<AiTurn>();
        ai.start_animating(ChosenMove {
            from: Square::E2,
            to: Square::E4,
            promotion: None,
        });
    }

    app.update();

    let log = app.world().resource::<MoveLog>();
    assert_eq!(log.len(), 1);
    assert_eq!(log.last_move().map(|m| m.san.as_str()), Some("e4"));
    assert_eq!(app.world().resource::<RulesEngine>().turn(), Color::Black);
}

// ============================================================================
// Undo/Redo While Promotion Prompt Open
// ============================================================================

fn action_app() -> App {
    let mut app = App::new();
    app.init_resource::<Selection>();
    app.init_resource::<RedoStack>();
    app.init_resource::<AiTurn>();
    app.init_resource::<PendingPromotion>();
    app.add_message::<UndoRequested>();
    app.add_message::<RedoRequested>();
    app.add_systems(Update, (handle_undo_requested, handle_redo_requested));

    // one move on the books
    let mut engine = RulesEngine::new();
    let mut log = MoveLog::default();
    let played = engine.apply(Square::E2, Square::E4, None).unwrap();
    log.push(played);
    app.insert_resource(engine);
    app.insert_resource(log);
    app
}

#[test]
fn test_undo_is_frozen_while_promotion_prompt_open() {
    let mut app = action_app();
    app.world_mut()
        .resource_mut::<PendingPromotion>()
        .start(Square::E7, Square::E8, Color::White);

    app.world_mut()
        .resource_mut::<Messages<UndoRequested>>()
        .write(UndoRequested);
    app.update();

    assert_eq!(
        app.world().resource::<MoveLog>().len(),
        1,
        "undo must be ignored while the prompt is open"
    );
    assert!(app.world().resource::<RedoStack>().is_empty());

    app.world_mut().resource_mut::<PendingPromotion>().clear();
    app.world_mut()
        .resource_mut::<Messages<UndoRequested>>()
        .write(UndoRequested);
    app.update();

    assert!(app.world().resource::<MoveLog>().is_empty());
    assert_eq!(app.world().resource::<RedoStack>().len(), 1);
}

#[test]
fn test_redo_is_frozen_while_promotion_prompt_open() {
    let mut app = action_app();
    // park e4 on the redo stack
    app.world_mut()
        .resource_mut::<Messages<UndoRequested>>()
        .write(UndoRequested);
    app.update();
    assert_eq!(app.world().resource::<RedoStack>().len(), 1);

    app.world_mut()
        .resource_mut::<PendingPromotion>()
        .start(Square::E7, Square::E8, Color::White);
    app.world_mut()
        .resource_mut::<Messages<RedoRequested>>()
        .write(RedoRequested);
    app.update();

    assert!(
        app.world().resource::<MoveLog>().is_empty(),
        "redo must be ignored while the prompt is open"
    );
    assert_eq!(app.world().resource::<RedoStack>().len(), 1);

    app.world_mut().resource_mut::<PendingPromotion>().clear();
    app.world_mut()
        .resource_mut::<Messages<RedoRequested>>()
        .write(RedoRequested);
    app.update();

    assert_eq!(app.world().resource::<MoveLog>().len(), 1);
    assert!(app.world().resource::<RedoStack>().is_empty());
}
