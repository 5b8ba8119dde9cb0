use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

/// A key event translated into simulation terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Restart,
    Quit,
}

/// Maps one key event to a command, if the key is bound to anything.
/// Arrow keys and WASD steer, `r` restarts, `q`/Esc/Ctrl+C quit.
pub fn map_key(event: &KeyEvent) -> Option<Command> {
    if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    match event.code {
        KeyCode::Up | KeyCode::Char('w') => Some(Command::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(Command::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(Command::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(Command::Turn(Direction::Right)),
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// The no-reversal rule: a requested turn is accepted unless it exactly
/// reverses the direction currently in effect. Changing axis is always
/// allowed, and from a standstill every direction is valid.
pub fn resolve_turn(requested: Direction, current: Option<Direction>) -> Option<Direction> {
    match current {
        Some(active) if requested == active.opposite() => None,
        _ => Some(requested),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::empty() }
    }

    #[test]
    fn arrows_and_wasd_both_steer() {
        assert_eq!(map_key(&key(KeyCode::Up)), Some(Command::Turn(Direction::Up)));
        assert_eq!(map_key(&key(KeyCode::Char('a'))), Some(Command::Turn(Direction::Left)));
        assert_eq!(map_key(&key(KeyCode::Char('s'))), Some(Command::Turn(Direction::Down)));
        assert_eq!(map_key(&key(KeyCode::Right)), Some(Command::Turn(Direction::Right)));
    }

    #[test]
    fn control_keys_map_to_restart_and_quit() {
        assert_eq!(map_key(&key(KeyCode::Char('r'))), Some(Command::Restart));
        assert_eq!(map_key(&key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(map_key(&key(KeyCode::Esc)), Some(Command::Quit));

        let ctrl_c = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert_eq!(map_key(&ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(map_key(&key(KeyCode::Char('x'))), None);
        assert_eq!(map_key(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn reversal_on_the_same_axis_is_rejected() {
        assert_eq!(resolve_turn(Direction::Left, Some(Direction::Right)), None);
        assert_eq!(resolve_turn(Direction::Up, Some(Direction::Down)), None);
    }

    #[test]
    fn changing_axis_is_always_allowed() {
        assert_eq!(resolve_turn(Direction::Up, Some(Direction::Right)), Some(Direction::Up));
        assert_eq!(resolve_turn(Direction::Left, Some(Direction::Down)), Some(Direction::Left));
    }

    #[test]
    fn repeating_the_current_direction_is_a_no_op_turn() {
        assert_eq!(resolve_turn(Direction::Right, Some(Direction::Right)), Some(Direction::Right));
    }

    #[test]
    fn any_direction_is_valid_from_a_standstill() {
        for requested in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(resolve_turn(requested, None), Some(requested));
        }
    }
}
