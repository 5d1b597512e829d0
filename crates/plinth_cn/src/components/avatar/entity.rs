//! Avatar entity: image with fallback initials and a status indicator

use serde::Serialize;

use crate::error::{EntityError, Violation};

const MAX_FALLBACK_CHARS: usize = 3;

/// Avatar size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvatarSize {
    /// Extra small - 24px
    ExtraSmall,
    /// Small - 32px
    Small,
    /// Medium - 40px
    #[default]
    Medium,
    /// Large - 48px
    Large,
    /// Extra large - 64px
    ExtraLarge,
}

/// Avatar shape variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarShape {
    #[default]
    Circle,
    /// Rounded square
    Square,
}

/// Presence indicator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarStatus {
    Online,
    Offline,
    Away,
    Busy,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AvatarState {
    pub src: Option<String>,
    pub alt: String,
    pub fallback: Option<String>,
    pub size: AvatarSize,
    pub shape: AvatarShape,
    pub status: Option<AvatarStatus>,
    pub image_failed: bool,
}

/// Partial avatar state; unset fields take their defaults
#[derive(Clone, Debug, Default)]
pub struct AvatarProps {
    src: Option<String>,
    alt: Option<String>,
    fallback: Option<String>,
    size: Option<AvatarSize>,
    shape: Option<AvatarShape>,
    status: Option<AvatarStatus>,
    image_failed: Option<bool>,
}

impl AvatarProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn shape(mut self, shape: AvatarShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn status(mut self, status: AvatarStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn image_failed(mut self, failed: bool) -> Self {
        self.image_failed = Some(failed);
        self
    }
}

enum AvatarChange {
    Src(Option<String>),
    ImageFailed(bool),
    Alt(String),
    Fallback(Option<String>),
    Size(AvatarSize),
    Shape(AvatarShape),
    Status(Option<AvatarStatus>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarEntity {
    state: AvatarState,
}

impl AvatarEntity {
    pub fn create(props: AvatarProps) -> Result<Self, EntityError> {
        let state = AvatarState {
            src: props.src,
            alt: props.alt.unwrap_or_default(),
            fallback: props.fallback,
            size: props.size.unwrap_or_default(),
            shape: props.shape.unwrap_or_default(),
            status: props.status,
            image_failed: props.image_failed.unwrap_or(false),
        };
        Self::from_state(state)
    }

    fn from_state(state: AvatarState) -> Result<Self, EntityError> {
        validate(&state)?;
        Ok(Self { state })
    }

    pub fn current_state(&self) -> AvatarState {
        self.state.clone()
    }

    pub fn src(&self) -> Option<&str> {
        self.state.src.as_deref()
    }

    pub fn alt(&self) -> &str {
        &self.state.alt
    }

    pub fn size(&self) -> AvatarSize {
        self.state.size
    }

    pub fn shape(&self) -> AvatarShape {
        self.state.shape
    }

    pub fn status(&self) -> Option<AvatarStatus> {
        self.state.status
    }

    pub fn has_status(&self) -> bool {
        self.state.status.is_some()
    }

    /// A source is set and has not failed to load
    pub fn has_image(&self) -> bool {
        self.state.src.is_some() && !self.state.image_failed
    }

    pub fn shows_fallback(&self) -> bool {
        !self.has_image()
    }

    /// The explicit fallback, or the uppercased first letters of up to two
    /// words of `alt`
    pub fn initials(&self) -> String {
        if let Some(fallback) = &self.state.fallback {
            return fallback.clone();
        }
        self.state
            .alt
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// A new source also resets the failed flag
    pub fn with_src(&self, src: Option<String>) -> Result<Self, EntityError> {
        self.apply(AvatarChange::Src(src))
    }

    pub fn with_image_failed(&self, failed: bool) -> Result<Self, EntityError> {
        self.apply(AvatarChange::ImageFailed(failed))
    }

    pub fn with_alt(&self, alt: impl Into<String>) -> Result<Self, EntityError> {
        self.apply(AvatarChange::Alt(alt.into()))
    }

    pub fn with_fallback(&self, fallback: Option<String>) -> Result<Self, EntityError> {
        self.apply(AvatarChange::Fallback(fallback))
    }

    pub fn with_size(&self, size: AvatarSize) -> Result<Self, EntityError> {
        self.apply(AvatarChange::Size(size))
    }

    pub fn with_shape(&self, shape: AvatarShape) -> Result<Self, EntityError> {
        self.apply(AvatarChange::Shape(shape))
    }

    pub fn with_status(&self, status: Option<AvatarStatus>) -> Result<Self, EntityError> {
        self.apply(AvatarChange::Status(status))
    }

    fn apply(&self, change: AvatarChange) -> Result<Self, EntityError> {
        let mut next = self.state.clone();
        match change {
            AvatarChange::Src(src) => {
                next.src = src;
                next.image_failed = false;
            }
            AvatarChange::ImageFailed(failed) => next.image_failed = failed,
            AvatarChange::Alt(alt) => next.alt = alt,
            AvatarChange::Fallback(fallback) => next.fallback = fallback,
            AvatarChange::Size(size) => next.size = size,
            AvatarChange::Shape(shape) => next.shape = shape,
            AvatarChange::Status(status) => next.status = status,
        }
        Self::from_state(next)
    }
}

fn validate(state: &AvatarState) -> Result<(), Violation> {
    if state.src.as_deref().is_some_and(|src| src.trim().is_empty()) {
        return Err(Violation::EmptyAvatarSource);
    }
    if let Some(fallback) = &state.fallback {
        if fallback.trim().is_empty() {
            return Err(Violation::EmptyAvatarFallback);
        }
        if fallback.chars().count() > MAX_FALLBACK_CHARS {
            return Err(Violation::AvatarFallbackTooLong);
        }
    }
    Ok(())
}
