//! Rules Adapter Integration Tests
//!
//! Exercises the rules engine through its click-level surface:
//! - Legal move queries and destinations
//! - Special moves (castling, en passant, promotion)
//! - Draw and terminal detection
//! - Threat classification for the overlay

use clickchess::rules::{RulesEngine, Threat, ThreatKind};
use shakmaty::{Color, Role, Square};

// ============================================================================
// Legal Move Queries
// ============================================================================

#[test]
fn test_starting_position_move_count() {
    let engine = RulesEngine::new();
    assert_eq!(engine.all_moves().len(), 20, "White should have 20 moves");
    assert_eq!(engine.turn(), Color::White);
    assert!(!engine.is_game_over());
}

#[test]
fn test_knight_destinations_from_g1() {
    let engine = RulesEngine::new();
    assert_eq!(
        engine.destinations(Square::G1),
        vec![Square::F3, Square::H3]
    );
}

#[test]
fn test_blocked_piece_has_no_destinations() {
    let engine = RulesEngine::new();
    assert!(engine.destinations(Square::C1).is_empty());
    assert!(engine.destinations(Square::E1).is_empty());
}

#[test]
fn test_empty_square_has_no_destinations() {
    let engine = RulesEngine::new();
    assert!(engine.destinations(Square::E4).is_empty());
}

// ============================================================================
// Special Moves
// ============================================================================

#[test]
fn test_castling_as_two_file_king_move() {
    let mut engine = RulesEngine::new();
    // 1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5, then White can castle kingside
    for (from, to) in [
        (Square::E2, Square::E4),
        (Square::E7, Square::E5),
        (Square::G1, Square::F3),
        (Square::B8, Square::C6),
        (Square::F1, Square::C4),
        (Square::F8, Square::C5),
    ] {
        engine.apply(from, to, None).unwrap();
    }

    assert!(
        engine.destinations(Square::E1).contains(&Square::G1),
        "castling should surface as the king's two-file hop"
    );
    let played = engine.apply(Square::E1, Square::G1, None).unwrap();
    assert_eq!(played.san, "O-O");
    assert_eq!(
        engine.piece_at(Square::F1).map(|p| p.role),
        Some(Role::Rook),
        "the rook should land on f1"
    );
}

#[test]
fn test_en_passant_is_a_capture() {
    let mut engine = RulesEngine::from_fen("k7/8/8/8/4pP2/8/8/K7 b - f3 0 1").unwrap();
    assert!(engine.destinations(Square::E4).contains(&Square::F3));
    let played = engine.apply(Square::E4, Square::F3, None).unwrap();
    assert!(played.capture);
    assert!(engine.piece_at(Square::F4).is_none(), "captured pawn gone");
}

#[test]
fn test_promotion_requires_choice_and_defaults_to_queen() {
    let mut engine = RulesEngine::from_fen("k7/4P3/8/8/8/8/8/K7 w - - 0 1").unwrap();
    assert!(engine.requires_promotion(Square::E7, Square::E8));

    let played = engine.apply(Square::E7, Square::E8, None).unwrap();
    assert_eq!(played.promotion, Some(Role::Queen));
    assert_eq!(played.san, "e8=Q+");
    engine.undo().unwrap();

    let played = engine.apply(Square::E7, Square::E8, Some(Role::Knight)).unwrap();
    assert_eq!(played.promotion, Some(Role::Knight));
    assert_eq!(played.san, "e8=N");
}

// ============================================================================
// Move History
// ============================================================================

#[test]
fn test_history_lists_san_in_order() {
    let mut engine = RulesEngine::new();
    assert!(engine.history().is_empty());

    engine.apply(Square::E2, Square::E4, None).unwrap();
    engine.apply(Square::E7, Square::E5, None).unwrap();
    engine.apply(Square::G1, Square::F3, None).unwrap();
    assert_eq!(engine.history(), vec!["e4", "e5", "Nf3"]);

    engine.undo().unwrap();
    assert_eq!(engine.history(), vec!["e4", "e5"]);
}

// ============================================================================
// Terminal Detection
// ============================================================================

#[test]
fn test_checkmate_ends_the_game() {
    let engine = RulesEngine::from_fen(
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3",
    )
    .unwrap();
    assert!(engine.is_checkmate());
    assert!(engine.is_game_over());
    assert!(engine.all_moves().is_empty());
}

#[test]
fn test_stalemate_is_a_draw() {
    let engine = RulesEngine::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(engine.is_stalemate());
    assert!(engine.is_draw());
    assert!(!engine.is_checkmate());
}

#[test]
fn test_bare_kings_are_a_draw() {
    let engine = RulesEngine::from_fen("8/8/4k3/8/8/4K3/8/8 w - - 0 1").unwrap();
    assert!(engine.is_insufficient_material());
    assert!(engine.is_draw());
    assert!(engine.is_game_over());
}

#[test]
fn test_checkmate_san_gets_mate_suffix() {
    // 1. f3 e5 2. g4 Qh4# (fool's mate)
    let mut engine = RulesEngine::new();
    engine.apply(Square::F2, Square::F3, None).unwrap();
    engine.apply(Square::E7, Square::E5, None).unwrap();
    engine.apply(Square::G2, Square::G4, None).unwrap();
    let played = engine.apply(Square::D8, Square::H4, None).unwrap();
    assert_eq!(played.san, "Qh4#");
    assert!(engine.is_checkmate());
}

// ============================================================================
// Threat Classification
// ============================================================================

#[test]
fn test_threats_are_classified_as_capture_or_check() {
    // Black queen on d8 attacks the d2 pawn and can check from e7
    let engine = RulesEngine::from_fen("3qk3/8/8/8/8/8/3P4/4K3 w - - 0 1").unwrap();
    let threats = engine.opponent_threats();

    assert!(threats.contains(&Threat {
        from: Square::D8,
        to: Square::D2,
        kind: ThreatKind::Capture,
    }));
    assert!(threats.contains(&Threat {
        from: Square::D8,
        to: Square::E7,
        kind: ThreatKind::Check,
    }));
    // quiet queen moves that neither capture nor check are not threats
    assert!(!threats.iter().any(|t| t.to == Square::D5));
}

#[test]
fn test_no_threats_while_side_to_move_is_in_check() {
    // White to move, already in check: the null-move swap is illegal
    let engine = RulesEngine::from_fen("4k3/8/8/8/7b/8/8/4K3 w - - 0 1").unwrap();
    assert!(engine.is_check());
    assert!(engine.opponent_threats().is_empty());
}

#[test]
fn test_threats_refresh_with_the_position() {
    let mut engine = RulesEngine::new();
    assert!(
        engine.opponent_threats().is_empty(),
        "no captures or checks available to Black at the start"
    );
    engine.apply(Square::E2, Square::E4, None).unwrap();
    engine.apply(Square::D7, Square::D5, None).unwrap();
    // White to move, so Black's d5xe4 shows up as an opposing capture
    assert!(engine.opponent_threats().contains(&Threat {
        from: Square::D5,
        to: Square::E4,
        kind: ThreatKind::Capture,
    }));
}
