#[cfg(test)]
mod tests {
    use invaders_core::components::Marcher;
    use invaders_core::config::GameConfig;
    use invaders_core::enums::{EntityKind, HorizontalDirection};
    use invaders_core::types::Position;

    use crate::grid::{build_layout, move_counter_max, right_limit};
    use crate::marching::{step, MarchStep, MarchTuning};
    use crate::FormationError;

    fn small_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.window.width = 400.0;
        config.window.left_buffer = 10.0;
        config.window.right_buffer = 10.0;
        config.window.top_buffer = 50.0;
        config.enemy.radius = 10.0;
        config.enemy.speed = 4.0;
        config.formation.rows = 3;
        config.formation.cols = 4;
        config.formation.spacing = 1.0;
        config
    }

    fn marcher(max: Option<u32>) -> Marcher {
        Marcher {
            direction: HorizontalDirection::Right,
            move_counter: 0,
            move_counter_max: max,
            speed: 2.0,
            point_value: 10,
        }
    }

    // ---- Layout ----

    #[test]
    fn test_layout_grid_positions() {
        let layout = build_layout(&small_config()).unwrap();
        assert_eq!(layout.len(), 12);

        // Cell pitch is 2r(1 + spacing) = 40.
        let first = layout.anchors[0];
        assert_eq!(first.position, Position::new(20.0, 60.0));
        assert_eq!((first.row, first.col), (0, 0));

        let second = layout.anchors[1];
        assert_eq!(second.position, Position::new(20.0, 100.0));

        let last = layout.anchors[11];
        assert_eq!(last.position, Position::new(140.0, 140.0));
        assert_eq!((last.row, last.col), (2, 3));
    }

    #[test]
    fn test_layout_top_row_shoots() {
        let layout = build_layout(&small_config()).unwrap();
        for anchor in &layout.anchors {
            let expected = if anchor.row == 0 {
                EntityKind::ShootingEnemy
            } else {
                EntityKind::StandardEnemy
            };
            assert_eq!(anchor.kind, expected, "row {} col {}", anchor.row, anchor.col);
        }
        assert_eq!(layout.count_of(EntityKind::ShootingEnemy), 4);
        assert_eq!(layout.count_of(EntityKind::StandardEnemy), 8);
    }

    #[test]
    fn test_layout_move_counter_max() {
        let config = small_config();
        let layout = build_layout(&config).unwrap();
        // Right limit 400 - 10 - 10 = 380, rightmost column 140, speed 4.
        assert_eq!(right_limit(&config), 380.0);
        assert_eq!(layout.move_counter_max, 60);
    }

    #[test]
    fn test_move_counter_max_floors() {
        assert_eq!(move_counter_max(100.0, 50.0, 3.0), 16);
        assert_eq!(move_counter_max(100.0, 100.0, 3.0), 0);
    }

    #[test]
    fn test_layout_overflow_fails() {
        let mut config = small_config();
        // Column 9 would sit at 20 + 9 * 40 = 380 (still fits), column 10 at 420.
        config.formation.cols = 10;
        assert!(build_layout(&config).is_ok());

        config.formation.cols = 11;
        let err = build_layout(&config).unwrap_err();
        assert_eq!(
            err,
            FormationError::LayoutOverflow {
                column: 10,
                x: 420.0,
                limit: 380.0
            }
        );
    }

    #[test]
    fn test_layout_spacing_zero_packs_cells() {
        let mut config = small_config();
        config.formation.spacing = 0.0;
        let layout = build_layout(&config).unwrap();
        assert_eq!(layout.anchors[config.formation.rows as usize].position.x, 40.0);
    }

    // ---- Marching ----

    #[test]
    fn test_march_moves_for_max_steps_then_drops() {
        let tuning = MarchTuning {
            drop_multiplier: 4.0,
            speed_increment: 3.0,
        };
        let mut m = marcher(Some(5));
        let mut pos = Position::new(100.0, 50.0);

        for i in 1..=5 {
            let before = pos;
            assert_eq!(step(&mut m, &mut pos, &tuning), Ok(MarchStep::Advanced));
            assert!(pos.x > before.x, "x must increase on step {i}");
            assert_eq!(pos.y, before.y);
            assert_eq!(m.move_counter, i);
        }

        assert_eq!(step(&mut m, &mut pos, &tuning), Ok(MarchStep::Dropped));
        assert_eq!(pos, Position::new(110.0, 58.0));
        assert_eq!(m.direction, HorizontalDirection::Left);
        assert_eq!(m.move_counter, 0);
        assert_eq!(m.speed, 5.0);

        // Next step heads back left at the new speed.
        step(&mut m, &mut pos, &tuning).unwrap();
        assert_eq!(pos.x, 105.0);
    }

    #[test]
    fn test_march_counter_stays_in_range() {
        let tuning = MarchTuning {
            drop_multiplier: 1.0,
            speed_increment: 0.0,
        };
        let mut m = marcher(Some(3));
        let mut pos = Position::default();
        for _ in 0..50 {
            step(&mut m, &mut pos, &tuning).unwrap();
            assert!(m.move_counter <= 3);
        }
    }

    #[test]
    fn test_march_zero_max_drops_every_tick() {
        let tuning = MarchTuning {
            drop_multiplier: 1.0,
            speed_increment: 0.0,
        };
        let mut m = marcher(Some(0));
        let mut pos = Position::default();
        assert_eq!(step(&mut m, &mut pos, &tuning), Ok(MarchStep::Dropped));
        assert_eq!(step(&mut m, &mut pos, &tuning), Ok(MarchStep::Dropped));
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.y, 4.0);
    }

    #[test]
    fn test_march_unassigned_max_fails() {
        let tuning = MarchTuning::from(&GameConfig::default().enemy);
        let mut m = marcher(None);
        let mut pos = Position::default();
        assert_eq!(
            step(&mut m, &mut pos, &tuning),
            Err(FormationError::MoveCounterMaxUnset)
        );
        assert_eq!(pos, Position::default(), "failed step must not move");
    }

    #[test]
    fn test_members_sharing_max_turn_together() {
        let config = small_config();
        let layout = build_layout(&config).unwrap();
        let tuning = MarchTuning::from(&config.enemy);

        let mut members: Vec<(Marcher, Position)> = layout
            .anchors
            .iter()
            .map(|a| {
                let mut m = marcher(Some(layout.move_counter_max));
                m.speed = layout.speed;
                (m, a.position)
            })
            .collect();

        let limit = right_limit(&config);
        for _ in 0..=layout.move_counter_max {
            let steps: Vec<MarchStep> = members
                .iter_mut()
                .map(|(m, p)| step(m, p, &tuning).unwrap())
                .collect();
            assert!(steps.windows(2).all(|w| w[0] == w[1]));
            assert!(members.iter().all(|(_, p)| p.x <= limit));
        }
        assert!(members
            .iter()
            .all(|(m, _)| m.direction == HorizontalDirection::Left));
    }
}
