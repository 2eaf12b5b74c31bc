//! Level description records
//!
//! The input side of level building: every field is optional, and absence
//! (as opposed to zero or an empty list) is what triggers a default. Keys
//! follow the camelCase naming used in level JSON files (`jumpV`, `platWMin`).

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use super::defaults;
use super::generator::{HopsLayout, StairsLayout};
use super::Rect;

/// A level as authored, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LevelDescription {
    pub name: Option<String>,
    pub gravity: Option<f32>,
    pub jump_v: Option<f32>,
    pub theme: Option<ThemeDescription>,
    pub start: Option<SpawnDescription>,
    /// Anything other than an array is treated as absent.
    #[serde(deserialize_with = "sequence_or_none")]
    pub platforms: Option<Vec<Rect>>,
    pub generated: Option<GeneratorConfig>,
}

/// Partial theme override; unset keys keep the default color.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeDescription {
    pub bg: Option<String>,
    pub platform: Option<String>,
    pub blob: Option<String>,
}

/// Partial spawn point; each coordinate defaults independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpawnDescription {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub r: Option<f32>,
}

/// Procedural platform generator, selected by the `type` tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum GeneratorConfig {
    #[serde(rename = "stairs")]
    Stairs(StairsParams),
    #[serde(rename = "randomHops")]
    RandomHops(RandomHopsParams),
    /// Any other tag. Contributes no platforms.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StairsParams {
    pub world_w: Option<f32>,
    pub floor_y: Option<f32>,
    pub floor_h: Option<f32>,
    pub start_x: Option<f32>,
    pub start_y: Option<f32>,
    pub step_w: Option<f32>,
    pub step_h: Option<f32>,
    pub rise: Option<f32>,
    pub count: Option<f64>,
}

impl StairsParams {
    pub fn resolve(&self) -> StairsLayout {
        use defaults::stairs as d;
        StairsLayout {
            world_w: self.world_w.unwrap_or(d::WORLD_W),
            floor_y: self.floor_y.unwrap_or(d::FLOOR_Y),
            floor_h: self.floor_h.unwrap_or(d::FLOOR_H),
            start_x: self.start_x.unwrap_or(d::START_X),
            start_y: self.start_y.unwrap_or(d::START_Y),
            step_w: self.step_w.unwrap_or(d::STEP_W),
            step_h: self.step_h.unwrap_or(d::STEP_H),
            rise: self.rise.unwrap_or(d::RISE),
            count: resolve_count(self.count, d::COUNT),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RandomHopsParams {
    pub world_w: Option<f32>,
    pub floor_y: Option<f32>,
    pub floor_h: Option<f32>,
    pub count: Option<f64>,
    pub plat_h: Option<f32>,
    pub plat_w_min: Option<f32>,
    pub plat_w_max: Option<f32>,
    pub gap_min: Option<f32>,
    pub gap_max: Option<f32>,
    pub rise_min: Option<f32>,
    pub rise_max: Option<f32>,
    pub start_x: Option<f32>,
    pub start_y: Option<f32>,
    /// Fixes the layout; without it every build differs.
    #[serde(deserialize_with = "any_number_seed")]
    pub seed: Option<u64>,
}

impl RandomHopsParams {
    pub fn resolve(&self) -> HopsLayout {
        use defaults::random_hops as d;
        HopsLayout {
            world_w: self.world_w.unwrap_or(d::WORLD_W),
            floor_y: self.floor_y.unwrap_or(d::FLOOR_Y),
            floor_h: self.floor_h.unwrap_or(d::FLOOR_H),
            count: resolve_count(self.count, d::COUNT),
            plat_h: self.plat_h.unwrap_or(d::PLAT_H),
            plat_w_min: self.plat_w_min.unwrap_or(d::PLAT_W_MIN),
            plat_w_max: self.plat_w_max.unwrap_or(d::PLAT_W_MAX),
            gap_min: self.gap_min.unwrap_or(d::GAP_MIN),
            gap_max: self.gap_max.unwrap_or(d::GAP_MAX),
            rise_min: self.rise_min.unwrap_or(d::RISE_MIN),
            rise_max: self.rise_max.unwrap_or(d::RISE_MAX),
            start_x: self.start_x.unwrap_or(d::START_X),
            start_y: self.start_y.unwrap_or(d::START_Y),
            seed: self.seed,
        }
    }
}

/// Repeat count from any JSON number: negatives become 0, fractions round up.
fn resolve_count(count: Option<f64>, default: u32) -> u32 {
    match count {
        Some(n) if n > 0.0 => n.ceil() as u32,
        Some(_) => 0,
        None => default,
    }
}

/// Map any JSON number to a seed.
///
/// Non-negative integers (`7` or `7.0`) are used as-is, negative integers
/// wrap as two's complement, and anything else uses its `f64` bit pattern.
fn seed_from_number(n: &Number) -> u64 {
    if let Some(seed) = n.as_u64() {
        return seed;
    }
    if let Some(seed) = n.as_i64() {
        return seed as u64;
    }
    let f = n.as_f64().unwrap_or(0.0);
    if f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64 {
        f as u64
    } else if f.fract() == 0.0 && f < 0.0 && f >= i64::MIN as f64 {
        (f as i64) as u64
    } else {
        f.to_bits()
    }
}

fn any_number_seed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(Option::<Number>::deserialize(deserializer)?.map(|n| seed_from_number(&n)))
}

fn sequence_or_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<Rect>>, D::Error> {
    match Value::deserialize(deserializer)? {
        items @ Value::Array(_) => Vec::<Rect>::deserialize(items)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_parses() {
        let desc: LevelDescription = serde_json::from_str("{}").unwrap();
        assert_eq!(desc, LevelDescription::default());
    }

    #[test]
    fn test_camel_case_keys() {
        let desc: LevelDescription = serde_json::from_str(
            r#"{ "name": "Hills", "jumpV": -9.5, "start": { "y": 50 } }"#,
        )
        .unwrap();
        assert_eq!(desc.name.as_deref(), Some("Hills"));
        assert_eq!(desc.jump_v, Some(-9.5));
        assert_eq!(desc.start, Some(SpawnDescription { x: None, y: Some(50.0), r: None }));
    }

    #[test]
    fn test_null_is_absent() {
        let desc: LevelDescription =
            serde_json::from_str(r#"{ "gravity": null, "platforms": null }"#).unwrap();
        assert!(desc.gravity.is_none());
        assert!(desc.platforms.is_none());
    }

    #[test]
    fn test_generator_tags() {
        let stairs: GeneratorConfig =
            serde_json::from_str(r#"{ "type": "stairs", "count": 3, "stepW": 10 }"#).unwrap();
        match stairs {
            GeneratorConfig::Stairs(p) => {
                assert_eq!(p.count, Some(3.0));
                assert_eq!(p.step_w, Some(10.0));
                assert!(p.rise.is_none());
            }
            other => panic!("expected stairs, got {:?}", other),
        }

        let hops: GeneratorConfig =
            serde_json::from_str(r#"{ "type": "randomHops", "seed": 42, "platWMin": 60 }"#).unwrap();
        match hops {
            GeneratorConfig::RandomHops(p) => {
                assert_eq!(p.seed, Some(42));
                assert_eq!(p.plat_w_min, Some(60.0));
            }
            other => panic!("expected randomHops, got {:?}", other),
        }

        let unknown: GeneratorConfig =
            serde_json::from_str(r#"{ "type": "teleport" }"#).unwrap();
        assert_eq!(unknown, GeneratorConfig::Unknown);
    }

    #[test]
    fn test_params_resolve_defaults() {
        let layout = StairsParams { count: Some(0.0), ..Default::default() }.resolve();
        assert_eq!(layout.count, 0);
        assert!((layout.world_w - 640.0).abs() < 0.001);
        assert!((layout.rise - 22.0).abs() < 0.001);

        let hops = RandomHopsParams::default().resolve();
        assert_eq!(hops.count, 10);
        assert!(hops.seed.is_none());
        assert!((hops.rise_min + 15.0).abs() < 0.001);
    }

    fn stairs_count(json: &str) -> u32 {
        match serde_json::from_str::<GeneratorConfig>(json).unwrap() {
            GeneratorConfig::Stairs(p) => p.resolve().count,
            other => panic!("expected stairs, got {:?}", other),
        }
    }

    fn hops_seed(json: &str) -> Option<u64> {
        match serde_json::from_str::<GeneratorConfig>(json).unwrap() {
            GeneratorConfig::RandomHops(p) => p.resolve().seed,
            other => panic!("expected randomHops, got {:?}", other),
        }
    }

    #[test]
    fn test_count_accepts_any_number() {
        assert_eq!(stairs_count(r#"{ "type": "stairs", "count": 3.0 }"#), 3);
        assert_eq!(stairs_count(r#"{ "type": "stairs", "count": 2.5 }"#), 3);
        assert_eq!(stairs_count(r#"{ "type": "stairs", "count": 0.2 }"#), 1);
        assert_eq!(stairs_count(r#"{ "type": "stairs", "count": -1 }"#), 0);
        assert_eq!(stairs_count(r#"{ "type": "stairs", "count": -2.5 }"#), 0);
        assert_eq!(stairs_count(r#"{ "type": "stairs" }"#), 8);
    }

    #[test]
    fn test_seed_accepts_any_number() {
        assert_eq!(hops_seed(r#"{ "type": "randomHops", "seed": 7 }"#), Some(7));
        assert_eq!(hops_seed(r#"{ "type": "randomHops", "seed": 7.0 }"#), Some(7));
        assert_eq!(hops_seed(r#"{ "type": "randomHops", "seed": -1 }"#), Some(u64::MAX));
        assert_eq!(hops_seed(r#"{ "type": "randomHops", "seed": -1.0 }"#), Some(u64::MAX));
        assert_eq!(hops_seed(r#"{ "type": "randomHops", "seed": 0.5 }"#), Some(0.5f64.to_bits()));
        assert_eq!(hops_seed(r#"{ "type": "randomHops", "seed": null }"#), None);
        assert_eq!(hops_seed(r#"{ "type": "randomHops" }"#), None);
    }

    #[test]
    fn test_fractional_seed_is_stable() {
        let a = hops_seed(r#"{ "type": "randomHops", "seed": 3.25 }"#);
        let b = hops_seed(r#"{ "type": "randomHops", "seed": 3.25 }"#);
        assert_eq!(a, b);
        assert_ne!(a, hops_seed(r#"{ "type": "randomHops", "seed": 3 }"#));
    }

    #[test]
    fn test_non_sequence_platforms_are_absent() {
        for json in [r#"{ "platforms": {} }"#, r#"{ "platforms": 5 }"#, r#"{ "platforms": "x" }"#] {
            let desc: LevelDescription = serde_json::from_str(json).unwrap();
            assert!(desc.platforms.is_none(), "{}", json);
        }

        let desc: LevelDescription =
            serde_json::from_str(r#"{ "platforms": [{ "x": 1, "y": 2, "w": 3, "h": 4 }] }"#).unwrap();
        assert_eq!(desc.platforms, Some(vec![Rect::new(1.0, 2.0, 3.0, 4.0)]));
    }
}
