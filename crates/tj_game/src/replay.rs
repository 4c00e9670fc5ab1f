use serde::Deserialize;
use std::fs;
use std::path::Path;
use tj_core::MotionInput;

use crate::simulation::Simulation;

#[derive(Debug, Deserialize, Clone)]
pub struct ReplaySequence {
    #[serde(default = "default_dt")]
    pub fixed_dt: f64,
    pub frames: Vec<ReplayFrame>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReplayFrame {
    #[serde(default)]
    pub move_x: f32,
    #[serde(default)]
    pub jump: bool,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayOutcome {
    pub x: f32,
    pub offset: f32,
    pub colliding_steps: u32,
}

impl ReplaySequence {
    pub fn expanded_inputs(&self) -> Vec<MotionInput> {
        let mut out = Vec::new();
        for frame in &self.frames {
            for _ in 0..frame.repeat.max(1) {
                out.push(MotionInput {
                    move_x: frame.move_x.clamp(-1.0, 1.0),
                    jump_pressed: frame.jump,
                });
            }
        }
        out
    }

    pub fn run(&self, sim: &mut Simulation) -> ReplayOutcome {
        let mut now = 0.0;
        let mut colliding_steps = 0;
        for input in self.expanded_inputs() {
            now += self.fixed_dt;
            sim.step(input, now);
            if sim.is_colliding() {
                colliding_steps += 1;
            }
        }
        ReplayOutcome {
            x: sim.motion.x,
            offset: sim.motion.offset(),
            colliding_steps,
        }
    }
}

pub fn load_replay_from_path(path: &Path) -> Result<ReplaySequence, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let replay: ReplaySequence = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse replay JSON {}: {e}", path.display()))?;
    validate_replay(&replay)?;
    Ok(replay)
}

fn validate_replay(replay: &ReplaySequence) -> Result<(), String> {
    if replay.fixed_dt <= 0.0 {
        return Err("Replay validation failed: fixed_dt must be > 0".to_string());
    }
    if replay.frames.is_empty() {
        return Err("Replay validation failed: frames list is empty".to_string());
    }
    Ok(())
}

const fn default_dt() -> f64 {
    1.0 / 60.0
}

const fn default_repeat() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file_path(name_hint: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "tj_replay_test_{}_{}_{}.json",
            name_hint,
            std::process::id(),
            nanos
        ))
    }

    fn load_inline(name_hint: &str, json: &str) -> Result<ReplaySequence, String> {
        let path = temp_file_path(name_hint);
        fs::write(&path, json).expect("write replay file");
        let result = load_replay_from_path(&path);
        let _ = fs::remove_file(path);
        result
    }

    #[test]
    fn replay_file_parses_and_expands() {
        let replay = load_inline(
            "parse",
            r#"{
              "frames": [
                { "move_x": 1.0, "repeat": 3 },
                { "jump": true },
                { "move_x": -4.0, "repeat": 0 }
              ]
            }"#,
        )
        .expect("replay should load");

        let expanded = replay.expanded_inputs();
        assert_eq!(expanded.len(), 5);
        assert!(expanded[3].jump_pressed);
        assert_eq!(expanded[4].move_x, -1.0);
        assert!((replay.fixed_dt - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn empty_replay_is_rejected() {
        let err = load_inline("empty", r#"{ "frames": [] }"#).expect_err("empty should fail");
        assert!(err.contains("frames list is empty"));
    }

    #[test]
    fn non_positive_dt_is_rejected() {
        let err = load_inline("dt", r#"{ "fixed_dt": 0.0, "frames": [ {} ] }"#)
            .expect_err("zero dt should fail");
        assert!(err.contains("fixed_dt"));
    }

    #[test]
    fn replay_run_is_deterministic() {
        let replay = load_inline(
            "deterministic",
            r#"{
              "frames": [
                { "move_x": 1.0, "repeat": 40 },
                { "move_x": 1.0, "jump": true },
                { "move_x": 1.0, "repeat": 90 },
                { "move_x": -1.0, "repeat": 30 }
              ]
            }"#,
        )
        .expect("replay should load");

        let a = replay.run(&mut Simulation::default());
        let b = replay.run(&mut Simulation::default());
        assert_eq!(a, b);
        // 131 steps right, 30 left.
        assert!((a.x - (-1.0 + 1.01)).abs() < 1e-4);
        assert_eq!(a.offset, 0.0);
        assert!(a.colliding_steps > 0);
    }

    #[test]
    fn replay_standing_still_never_collides() {
        let replay = load_inline(
            "still",
            r#"{ "frames": [ { "jump": true, "repeat": 120 } ] }"#,
        )
        .expect("replay should load");

        let outcome = replay.run(&mut Simulation::default());
        assert_eq!(outcome.x, -1.0);
        assert_eq!(outcome.colliding_steps, 0);
    }
}
