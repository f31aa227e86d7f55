#[cfg(test)]
mod tests {
    use std::path::Path;

    use glam::Vec3;

    use crate::commands::{EngineCommand, InputEvent};
    use crate::config::GameConfig;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::CharacterEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Rotator, SimTime};

    #[test]
    fn test_dash_state_serde_is_tagged() {
        let state = DashState::Dashing {
            elapsed_secs: 0.5,
            since_launch_secs: 0.25,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"state\":\"Dashing\""), "got {json}");
        let back: DashState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);

        let ready: DashState = serde_json::from_str(r#"{"state":"Ready"}"#).unwrap();
        assert_eq!(ready, DashState::Ready);
    }

    #[test]
    fn test_dash_state_accessors() {
        assert!(!DashState::Ready.is_dashing());
        assert_eq!(DashState::Ready.elapsed_secs(), 0.0);
        assert_eq!(DashState::Ready.since_launch_secs(), 0.0);

        let started = DashState::started();
        assert!(started.is_dashing());
        assert_eq!(started.elapsed_secs(), 0.0);

        let mid = DashState::Dashing {
            elapsed_secs: 0.4,
            since_launch_secs: 0.1,
        };
        assert_eq!(mid.elapsed_secs(), 0.4);
        assert_eq!(mid.since_launch_secs(), 0.1);
    }

    #[test]
    fn test_facing_sign_and_yaw() {
        assert_eq!(FacingDirection::Right.sign(), 1.0);
        assert_eq!(FacingDirection::Left.sign(), -1.0);
        assert_eq!(FacingDirection::Right.control_yaw(), 0.0);
        assert_eq!(FacingDirection::Left.control_yaw(), 180.0);
        assert_eq!(FacingDirection::default(), FacingDirection::Right);
    }

    /// Commands arrive from scripts and the platform layer as JSON.
    #[test]
    fn test_engine_command_json_shape() {
        let json = r#"{"type":"Input","event":{"kind":"Axis","name":"MoveRight","value":-1.0}}"#;
        let cmd: EngineCommand = serde_json::from_str(json).unwrap();
        match cmd {
            EngineCommand::Input { event } => {
                assert_eq!(event, InputEvent::axis("MoveRight", -1.0));
            }
            other => panic!("unexpected command {other:?}"),
        }

        let start: EngineCommand = serde_json::from_str(r#"{"type":"StartMatch"}"#).unwrap();
        assert!(matches!(start, EngineCommand::StartMatch));

        let touch = EngineCommand::from(InputEvent::Touch {
            phase: InputPhase::Pressed,
            finger: 1,
            location: Vec3::new(10.0, 0.0, 20.0),
        });
        let json = serde_json::to_string(&touch).unwrap();
        let back: EngineCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }

    #[test]
    fn test_character_event_serde() {
        let events = vec![
            CharacterEvent::DashStarted {
                facing: FacingDirection::Left,
            },
            CharacterEvent::Launched { impulse_x: -1200.0 },
            CharacterEvent::DashEnded,
            CharacterEvent::AnimationChanged {
                clip: AnimationClip::Running,
            },
            CharacterEvent::Jumped,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: CharacterEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_default_config_matches_stock_character() {
        let config = GameConfig::default();
        assert_eq!(config.tick_rate, TICK_RATE);
        assert_eq!(config.default_pawn, PawnClass::SideScrollerCharacter);
        assert_eq!(config.input.jump_action, "Jump");
        assert_eq!(config.input.move_axis, "MoveRight");
        assert_eq!(config.input.dash_action, "Dash");

        let character = &config.character;
        assert_eq!(character.capsule.half_height, 96.0);
        assert_eq!(character.capsule.radius, 40.0);
        assert_eq!(character.movement.gravity_scale, 2.0);
        assert_eq!(character.movement.ground_friction, 3.0);
        assert_eq!(character.movement.max_walk_speed, 600.0);
        assert_eq!(
            character.movement.plane_constraint_normal,
            Some(Vec3::new(0.0, -1.0, 0.0))
        );
        assert_eq!(character.dash.impulse, 1200.0);
        assert_eq!(character.dash.relaunch_interval_secs, 0.3);
        assert_eq!(character.dash.duration_secs, 0.8);
        assert_eq!(character.dash.post_dash_friction, 0.0);
        assert!(!character.dash.restore_friction_after_dash);
        assert_eq!(character.camera.arm_length, 500.0);
        assert_eq!(character.camera.ortho_width, 2048.0);
        assert_eq!(character.animations.idle, IDLE_ANIMATION_PATH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let json = r#"{
            "tick_rate": 30,
            "character": { "dash": { "impulse": 900.0, "restore_friction_after_dash": true } }
        }"#;
        let config = GameConfig::from_json_str(json).unwrap();
        assert_eq!(config.tick_rate, 30);
        assert_eq!(config.character.dash.impulse, 900.0);
        assert!(config.character.dash.restore_friction_after_dash);
        // Untouched fields keep their defaults.
        assert_eq!(config.character.dash.duration_secs, DASH_DURATION_SECS);
        assert_eq!(config.character.movement.jump_z_velocity, JUMP_Z_VELOCITY);
        assert_eq!(config.input.dash_action, DASH_ACTION);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let cases = [
            r#"{"tick_rate": 0}"#,
            r#"{"input": {"dash_action": "  "}}"#,
            r#"{"character": {"dash": {"duration_secs": 0.0}}}"#,
            r#"{"character": {"dash": {"relaunch_interval_secs": -1.0}}}"#,
            r#"{"character": {"movement": {"ground_friction": -0.5}}}"#,
            r#"{"character": {"capsule": {"half_height": 10.0, "radius": 40.0}}}"#,
        ];
        for json in cases {
            match GameConfig::from_json_str(json) {
                Err(ConfigError::Invalid(_)) => {}
                other => panic!("expected Invalid for {json}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_nan_friction_and_infinite_impulse_rejected() {
        let mut config = GameConfig::default();
        config.character.dash.post_dash_friction = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.character.movement.ground_friction = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.character.dash.impulse = f32::INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_config_parse_and_io_errors() {
        assert!(matches!(
            GameConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::load(Path::new("/definitely/not/here/factotum.json")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_rotator_forward_and_yaw_rotation() {
        let boom = Rotator::from_yaw(CAMERA_BOOM_YAW);
        let forward = boom.forward();
        assert!(forward.x.abs() < 1e-5);
        assert!((forward.y + 1.0).abs() < 1e-5);
        assert_eq!(forward.z, 0.0);

        let rotated = Rotator::from_yaw(90.0).rotate_yaw(Vec3::X);
        assert!((rotated - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance(DT);
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_snapshot_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, MatchPhase::WaitingToStart);
        assert!(back.pawn.is_none());
        assert!(back.events.is_empty());
    }
}
