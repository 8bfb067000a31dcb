//! End-to-end tests for the presenter turn loop.

use std::collections::VecDeque;
use tictactoe_mvp::{
    Board, Difficulty, FirstMover, GameSettings, Handled, Mark, Notification, OPPONENT_MARK,
    OpponentPlayer, Outcome, PLAYER_MARK, Phase, Position, Presenter, RecordingView, Rejection,
    rules, winning_move,
};

/// Opponent that plays a fixed script of positions.
struct ScriptedOpponent {
    moves: VecDeque<Position>,
}

impl ScriptedOpponent {
    fn new(moves: &[Position]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
        }
    }
}

impl OpponentPlayer for ScriptedOpponent {
    fn choose_move(&mut self, _board: &Board, _difficulty: Difficulty) -> Option<Position> {
        self.moves.pop_front()
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

fn scripted(settings: GameSettings, moves: &[Position]) -> Presenter<RecordingView, ScriptedOpponent> {
    Presenter::with_opponent(RecordingView::new(settings), ScriptedOpponent::new(moves))
}

fn opponent_first() -> GameSettings {
    GameSettings {
        first_mover: FirstMover::Opponent,
        difficulty: Difficulty::Hard,
    }
}

#[test]
fn test_player_wins_top_row() {
    let mut p = scripted(
        GameSettings::default(),
        &[Position::BottomLeft, Position::BottomCenter],
    );
    assert_eq!(p.start_game(), Ok(Phase::PlayerTurn));

    assert_eq!(p.cell_chosen(0, 0), Ok(Handled::Applied(Phase::PlayerTurn)));
    assert_eq!(p.cell_chosen(0, 1), Ok(Handled::Applied(Phase::PlayerTurn)));
    assert_eq!(p.cell_chosen(0, 2), Ok(Handled::Applied(Phase::Over)));

    let view = p.view();
    assert_eq!(view.endings(), vec![Outcome::PlayerWin]);
    assert_eq!(
        view.notifications().last(),
        Some(&Notification::InputEnabled(false))
    );
    let n = view.notifications().len();
    assert_eq!(
        view.notifications()[n - 2],
        Notification::GameEnded(Outcome::PlayerWin)
    );
    assert!(p.state().is_over());
    assert_eq!(p.state().history().len(), 5);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut p = scripted(
        GameSettings::default(),
        &[
            Position::TopCenter,
            Position::Center,
            Position::BottomLeft,
            Position::MiddleRight,
        ],
    );
    p.start_game().unwrap();
    for (row, col) in [(0, 0), (0, 2), (1, 0), (2, 1)] {
        assert_eq!(p.cell_chosen(row, col), Ok(Handled::Applied(Phase::PlayerTurn)));
    }
    assert_eq!(p.cell_chosen(2, 2), Ok(Handled::Applied(Phase::Over)));

    assert_eq!(p.view().endings(), vec![Outcome::Draw]);
    assert_eq!(
        p.view().last_board(),
        Some(&"XOX/XOO/OXX".parse::<Board>().unwrap())
    );
    assert!(
        !p.view()
            .notifications()
            .iter()
            .any(|n| matches!(n, Notification::CellHighlighted(_)))
    );
}

#[test]
fn test_repeated_click_on_occupied_cell_is_ignored() {
    let mut p = scripted(GameSettings::default(), &[Position::BottomRight]);
    p.start_game().unwrap();
    p.cell_chosen(1, 1).unwrap();

    let changes = p.view().board_changes();
    let state = p.state().clone();

    for _ in 0..2 {
        assert_eq!(
            p.cell_chosen(1, 1),
            Ok(Handled::Ignored(Rejection::CellOccupied(Position::Center)))
        );
    }
    assert_eq!(p.view().board_changes(), changes);
    assert_eq!(p.state(), &state);
}

#[test]
fn test_clicking_opponent_cell_is_ignored() {
    let mut p = scripted(GameSettings::default(), &[Position::BottomRight]);
    p.start_game().unwrap();
    p.cell_chosen(0, 0).unwrap();
    assert_eq!(
        p.cell_chosen(2, 2),
        Ok(Handled::Ignored(Rejection::CellOccupied(Position::BottomRight)))
    );
}

#[test]
fn test_opponent_moves_first() {
    let mut p = scripted(opponent_first(), &[Position::Center]);
    assert_eq!(p.start_game(), Ok(Phase::PlayerTurn));

    assert_eq!(p.view().board_changes(), 2);
    assert_eq!(p.state().board().count(OPPONENT_MARK), 1);
    assert!(p.state().is_player_turn());
    assert_eq!(p.difficulty(), Difficulty::Hard);
}

#[test]
fn test_opponent_wins_and_input_locks() {
    let mut p = scripted(
        opponent_first(),
        &[Position::Center, Position::TopCenter, Position::BottomCenter],
    );
    p.start_game().unwrap();
    p.cell_chosen(0, 0).unwrap();
    assert_eq!(p.cell_chosen(0, 2), Ok(Handled::Applied(Phase::Over)));
    assert_eq!(p.view().endings(), vec![Outcome::OpponentWin]);

    let recorded = p.view().notifications().len();
    assert_eq!(
        p.cell_chosen(2, 2),
        Ok(Handled::Ignored(Rejection::GameOver))
    );
    assert_eq!(p.view().notifications().len(), recorded);
}

#[test]
fn test_restart_after_game_over() {
    let mut p = scripted(
        GameSettings::default(),
        &[Position::BottomLeft, Position::BottomCenter, Position::Center],
    );
    p.start_game().unwrap();
    p.cell_chosen(0, 0).unwrap();
    p.cell_chosen(0, 1).unwrap();
    p.cell_chosen(0, 2).unwrap();
    assert_eq!(p.phase(), Phase::Over);

    p.view_mut().take();
    p.view_mut().set_settings(opponent_first());
    assert_eq!(p.start_game(), Ok(Phase::PlayerTurn));

    let notifications = p.view().notifications();
    assert_eq!(notifications[0], Notification::BoardChanged(Board::new()));
    assert_eq!(notifications[1], Notification::InputEnabled(true));
    assert_eq!(p.state().history().len(), 1);
    assert!(!p.state().is_over());
}

#[test]
fn test_settings_are_read_only_at_start() {
    let mut p = scripted(GameSettings::default(), &[Position::Center]);
    p.start_game().unwrap();
    assert_eq!(p.difficulty(), Difficulty::Easy);

    p.view_mut().set_settings(opponent_first());
    p.cell_chosen(0, 0).unwrap();
    assert_eq!(p.difficulty(), Difficulty::Easy);
}

#[test]
fn test_hard_opponent_blocks_line_through_center() {
    let settings = GameSettings {
        first_mover: FirstMover::Player,
        difficulty: Difficulty::Hard,
    };
    let mut p = Presenter::new(RecordingView::new(settings), Some(17));
    p.start_game().unwrap();
    p.cell_chosen(1, 1).unwrap();

    // Pick a cell whose mirror through the center is still free.
    let board = *p.state().board();
    let (threat, mirror) = Position::ALL
        .iter()
        .map(|&pos| (pos, Position::from_index(8 - pos.to_index()).unwrap()))
        .find(|&(pos, mirror)| pos != Position::Center && board.is_empty(pos) && board.is_empty(mirror))
        .unwrap();

    assert_eq!(
        p.cell_chosen(threat.row(), threat.col()),
        Ok(Handled::Applied(Phase::PlayerTurn))
    );
    assert_eq!(
        p.state().history().last().map(|m| (m.mark, m.position)),
        Some((OPPONENT_MARK, mirror))
    );
}

#[test]
fn test_same_seed_same_game() {
    let run = |seed| {
        let mut p = Presenter::new(RecordingView::new(GameSettings::default()), Some(seed));
        p.start_game().unwrap();
        for (row, col) in [(0, 0), (1, 1), (2, 2), (0, 2), (2, 0), (1, 0), (0, 1)] {
            p.cell_chosen(row, col).unwrap();
        }
        p.view().notifications().to_vec()
    };
    assert_eq!(run(1234), run(1234));
}

/// Number of free cells where `mark` would complete a line.
fn open_lines(board: &Board, mark: Mark) -> usize {
    rules::legal_moves(board)
        .into_iter()
        .filter(|&pos| {
            board
                .with_mark(pos, mark)
                .is_ok_and(|trial| rules::has_won(&trial, mark))
        })
        .count()
}

/// Every board the Hard opponent can produce: its own win, else the first
/// block, else any free cell.
fn hard_replies(board: &Board) -> Vec<Board> {
    let forced = winning_move(board, OPPONENT_MARK).or_else(|| winning_move(board, PLAYER_MARK));
    let cells = match forced {
        Some(pos) => vec![pos],
        None => rules::legal_moves(board),
    };
    cells
        .into_iter()
        .filter_map(|pos| board.with_mark(pos, OPPONENT_MARK).ok())
        .collect()
}

/// A player move that wins against every possible Hard reply, if any.
fn forcing_move(board: &Board) -> Option<Position> {
    rules::legal_moves(board).into_iter().find(|&pos| {
        let Ok(next) = board.with_mark(pos, PLAYER_MARK) else {
            return false;
        };
        if rules::has_won(&next, PLAYER_MARK) {
            return true;
        }
        let replies = hard_replies(&next);
        !replies.is_empty()
            && replies.iter().all(|reply| {
                !rules::has_won(reply, OPPONENT_MARK) && forcing_move(reply).is_some()
            })
    })
}

#[test]
fn test_fork_beats_hard_opponent() {
    let settings = GameSettings {
        first_mover: FirstMover::Player,
        difficulty: Difficulty::Hard,
    };
    let mut forced_games = 0;

    for seed in 0..32 {
        let mut p = Presenter::new(RecordingView::new(settings), Some(seed));
        p.start_game().unwrap();
        p.cell_chosen(0, 0).unwrap();

        // Only a center reply to a corner opening escapes a forced loss.
        let Some(mut pos) = forcing_move(p.state().board()) else {
            assert_eq!(p.state().board().count(OPPONENT_MARK), 1);
            assert!(!p.state().board().is_empty(Position::Center));
            continue;
        };

        let mut widest_fork = 0;
        loop {
            let next = p.state().board().with_mark(pos, PLAYER_MARK).unwrap();
            if !rules::has_won(&next, PLAYER_MARK) {
                widest_fork = widest_fork.max(open_lines(&next, PLAYER_MARK));
            }
            match p.cell_chosen(pos.row(), pos.col()).unwrap() {
                Handled::Applied(Phase::Over) => break,
                Handled::Applied(Phase::PlayerTurn) => {}
                other => panic!("seed {seed}: unexpected {other:?}"),
            }
            pos = forcing_move(p.state().board())
                .unwrap_or_else(|| panic!("seed {seed}: forced win lost"));
        }

        assert!(widest_fork >= 2, "seed {seed}: won without a fork");
        assert_eq!(p.view().endings(), vec![Outcome::PlayerWin]);
        let n = p.view().notifications().len();
        assert_eq!(
            p.view().notifications()[n - 2..],
            [
                Notification::GameEnded(Outcome::PlayerWin),
                Notification::InputEnabled(false),
            ]
        );
        forced_games += 1;
    }

    assert!(forced_games > 0);
}
