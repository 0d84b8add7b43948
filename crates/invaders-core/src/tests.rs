#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::config::GameConfig;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::geometry::{circles_overlap, clamp, lead_entity, EmptySetError};
    use crate::input::InputState;
    use crate::state::{DisplayView, EntityView, GameStateSnapshot};
    use crate::types::{Circle, EntityId, Position, SimTime};

    // ---- clamp ----

    #[test]
    fn test_clamp_value_between_bounds() {
        assert_eq!(clamp(4.0, 3.0, 5.0), 4.0);
    }

    #[test]
    fn test_clamp_value_below_minimum() {
        assert_eq!(clamp(1.0, 3.0, 5.0), 3.0);
    }

    #[test]
    fn test_clamp_value_above_maximum() {
        assert_eq!(clamp(7.0, 3.0, 5.0), 5.0);
    }

    #[test]
    fn test_clamp_value_on_bounds() {
        assert_eq!(clamp(3.0, 3.0, 5.0), 3.0);
        assert_eq!(clamp(5.0, 3.0, 5.0), 5.0);
    }

    proptest! {
        #[test]
        fn prop_clamp_stays_in_bounds(v in -1e6f64..1e6, lo in -1e3f64..1e3, span in 0f64..1e3) {
            let hi = lo + span;
            let c = clamp(v, lo, hi);
            prop_assert!(c >= lo && c <= hi);
            if v < lo {
                prop_assert_eq!(c, lo);
            } else if v > hi {
                prop_assert_eq!(c, hi);
            } else {
                prop_assert_eq!(c, v);
            }
        }

        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500f64..500.0, ay in -500f64..500.0, ar in 0f64..50.0,
            bx in -500f64..500.0, by in -500f64..500.0, br in 0f64..50.0,
        ) {
            let a = Circle::new(Position::new(ax, ay), ar);
            let b = Circle::new(Position::new(bx, by), br);
            prop_assert_eq!(circles_overlap(&a, &b), circles_overlap(&b, &a));
        }
    }

    // ---- circle overlap ----

    #[test]
    fn test_overlap_touching_counts() {
        let a = Circle::new(Position::new(0.0, 0.0), 3.0);
        let b = Circle::new(Position::new(5.0, 0.0), 2.0);
        assert!(circles_overlap(&a, &b), "touching circles must collide");
    }

    #[test]
    fn test_overlap_apart() {
        let a = Circle::new(Position::new(0.0, 0.0), 3.0);
        let b = Circle::new(Position::new(3.0, 4.0), 1.9);
        assert!(!circles_overlap(&a, &b));
    }

    #[test]
    fn test_overlap_concentric() {
        let a = Circle::new(Position::new(10.0, 10.0), 1.0);
        let b = Circle::new(Position::new(10.0, 10.0), 0.0);
        assert!(circles_overlap(&a, &b));
    }

    // ---- lead entity ----

    fn row() -> Vec<(u32, Position)> {
        vec![
            (1, Position::new(50.0, 0.0)),
            (2, Position::new(10.0, 0.0)),
            (3, Position::new(90.0, 0.0)),
            (4, Position::new(90.0, 40.0)),
        ]
    }

    #[test]
    fn test_lead_entity_right_picks_max_x() {
        assert_eq!(lead_entity(HorizontalDirection::Right, row()), Ok(3));
    }

    #[test]
    fn test_lead_entity_left_picks_min_x() {
        assert_eq!(lead_entity(HorizontalDirection::Left, row()), Ok(2));
    }

    #[test]
    fn test_lead_entity_empty_set_fails() {
        let empty: Vec<(u32, Position)> = Vec::new();
        assert_eq!(
            lead_entity(HorizontalDirection::Right, empty),
            Err(EmptySetError)
        );
    }

    // ---- enums ----

    #[test]
    fn test_direction_flip_and_sign() {
        assert_eq!(HorizontalDirection::Right.flipped(), HorizontalDirection::Left);
        assert_eq!(HorizontalDirection::Left.flipped(), HorizontalDirection::Right);
        assert_eq!(HorizontalDirection::Left.sign(), -1.0);
        assert_eq!(VerticalHeading::Up.sign(), -1.0);
        assert_eq!(VerticalHeading::Down.sign(), 1.0);
    }

    #[test]
    fn test_outcome_terminal() {
        assert!(!Outcome::Playing.is_terminal());
        assert!(Outcome::Won.is_terminal());
        assert!(Outcome::Lost.is_terminal());
    }

    #[test]
    fn test_entity_kind_predicates() {
        assert!(EntityKind::ShootingEnemy.is_enemy());
        assert!(EntityKind::StandardEnemy.is_enemy());
        assert!(!EntityKind::Player.is_enemy());
        assert!(EntityKind::EnemyBullet.is_bullet());
        assert!(!EntityKind::ScoreDisplay.is_bullet());
    }

    // ---- input ----

    #[test]
    fn test_input_axis_cancels() {
        let both = InputState {
            move_left: true,
            move_right: true,
            fire: false,
        };
        assert_eq!(both.horizontal_axis(), 0.0);
        assert_eq!(
            InputState {
                move_left: true,
                ..InputState::IDLE
            }
            .horizontal_axis(),
            -1.0
        );
        assert!(InputState::fire().fire);
    }

    // ---- time ----

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..20 {
            t.advance(0.05);
        }
        assert_eq!(t.tick, 20);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_entity_id_ordering() {
        assert!(EntityId(1) < EntityId(2));
        assert_eq!(EntityId(7).to_string(), "#7");
    }

    // ---- config ----

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_config_rejects_zero_radius() {
        let mut config = GameConfig::default();
        config.enemy.radius = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "enemy.radius",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_config_rejects_negative_velocity() {
        let mut config = GameConfig::default();
        config.player.vel = -2.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "player.vel",
                ..
            })
        ));
    }

    #[test]
    fn test_config_rejects_bad_probability() {
        let mut config = GameConfig::default();
        config.enemy.shooting_frequency = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ProbabilityOutOfRange { .. })
        ));
    }

    #[test]
    fn test_config_rejects_empty_formation() {
        let mut config = GameConfig::default();
        config.formation.cols = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyFormation { rows: 4, cols: 0 })
        );
    }

    #[test]
    fn test_config_rejects_player_wider_than_lane() {
        let mut config = GameConfig::default();
        config.window.width = 60.0;
        // 60 - 10 - 10 leaves 40, exactly one default player diameter.
        assert_eq!(config.validate(), Ok(()));

        config.player.radius = 21.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::PlayerTooWide {
                diameter: 42.0,
                lane: 40.0
            })
        );
    }

    #[test]
    fn test_config_rejects_zero_lives() {
        let mut config = GameConfig::default();
        config.meta.start_lives = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoLives));
    }

    #[test]
    fn test_partial_bullet_sections_keep_their_own_defaults() {
        use crate::constants::*;

        let json = r#"{
            "player": { "bullet": { "speed": 30.0 } },
            "enemy": { "bullet": { "recoil": 2.0 } }
        }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.enemy.bullet.recoil, 2.0);
        assert_eq!(config.enemy.bullet.speed, ENEMY_BULLET_SPEED);
        assert_eq!(config.enemy.bullet.radius, ENEMY_BULLET_RADIUS);

        assert_eq!(config.player.bullet.speed, 30.0);
        assert_eq!(config.player.bullet.radius, PLAYER_BULLET_RADIUS);
        assert_eq!(config.player.bullet.recoil, PLAYER_RECOIL_SECS);
    }

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let json = r#"{ "window": { "width": 1024 }, "meta": { "start_lives": 5 } }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.window.width, 1024.0);
        assert_eq!(config.window.height, crate::constants::WINDOW_HEIGHT);
        assert_eq!(config.meta.start_lives, 5);
        assert_eq!(config.meta.hit_penalty, crate::constants::HIT_PENALTY);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_playfield_subtracts_buffers() {
        let config = GameConfig::default();
        let field = config.playfield();
        assert_eq!(field.min_x, config.window.left_buffer);
        assert_eq!(field.max_x, config.window.width - config.window.right_buffer);
        assert_eq!(field.min_y, config.window.top_buffer);
        assert_eq!(field.max_y, config.bottom_boundary());
    }

    // ---- snapshot ----

    #[test]
    fn test_snapshot_serializes_display_payload() {
        let snapshot = GameStateSnapshot {
            entities: vec![EntityView {
                id: EntityId(3),
                kind: EntityKind::EndScreenDisplay,
                position: Position::new(400.0, 300.0),
                radius: 0.0,
                display: Some(DisplayView::EndScreen {
                    message: Outcome::Won.message().to_string(),
                    final_score: 120,
                }),
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"EndScreen\""));
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
        assert_eq!(back.count_of(EntityKind::EndScreenDisplay), 1);
    }
}
