use castlewalk_common::{ConfigError, Side};

/// Errors from map construction. All of them happen before play starts.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("invalid map configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("door on the {side} side is {width} wide but the side is only {span} long")]
    DoorTooWide { side: Side, width: f32, span: f32 },
    #[error("door on the {side} side has non-positive width {width}")]
    DoorTooNarrow { side: Side, width: f32 },
}
