use crate::*;

/// Effective heading for the next tick. A 180° reversal is dropped unless the
/// snake is a single segment, where no reversal can hit the body.
pub fn resolve_direction(requested: Direction, current: Direction, snake_len: usize) -> Direction {
    if snake_len == 1 || !requested.is_opposite(current) {
        requested
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_is_dropped_for_long_snakes() {
        assert_eq!(
            resolve_direction(Direction::Left, Direction::Right, 3),
            Direction::Right
        );
        assert_eq!(
            resolve_direction(Direction::Up, Direction::Down, 2),
            Direction::Down
        );
    }

    #[test]
    fn reversal_is_allowed_for_a_lone_head() {
        assert_eq!(
            resolve_direction(Direction::Left, Direction::Right, 1),
            Direction::Left
        );
    }

    #[test]
    fn turns_and_repeats_pass_through() {
        assert_eq!(
            resolve_direction(Direction::Up, Direction::Right, 5),
            Direction::Up
        );
        assert_eq!(
            resolve_direction(Direction::Right, Direction::Right, 5),
            Direction::Right
        );
    }
}
