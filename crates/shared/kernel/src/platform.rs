use fxhash::FxHashMap;
use hunt_domain::aspect::{Aspect, InitializedAspect};
use hunt_domain::config::HuntConfig;
use hunt_domain::registry::SlotRegistry;
use std::any::TypeId;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;

#[hunt_derive::hunt_error]
pub enum PlatformError {
    #[error("Platform validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Platform missing aspect{}: {message}", format_context(.context))]
    MissingAspect { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct PlatformInner {
    pub config: HuntConfig,
    pub slots: SlotRegistry,
    aspects: FxHashMap<TypeId, InitializedAspect>,
    order: Vec<TypeId>,
}

/// The composed application: enabled aspects plus the frozen slot registry.
#[derive(Debug, Clone)]
pub struct Platform {
    inner: Arc<PlatformInner>,
}

impl Platform {
    #[must_use]
    pub fn builder() -> PlatformBuilder {
        PlatformBuilder::default()
    }

    #[must_use]
    pub fn aspect<T: Aspect>(&self) -> Option<&T> {
        self.inner
            .aspects
            .get(&TypeId::of::<T>())
            .and_then(|initialized| initialized.state.as_any().downcast_ref::<T>())
    }

    /// Returns a reference to the aspect if it was composed into the platform.
    ///
    /// # Errors
    /// Returns [`PlatformError::MissingAspect`] if the aspect is not registered.
    pub fn try_aspect<T: Aspect>(&self) -> Result<&T, PlatformError> {
        self.aspect::<T>().ok_or_else(|| PlatformError::MissingAspect {
            message: std::any::type_name::<T>().into(),
            context: None,
        })
    }

    /// Aspect names in registration order.
    pub fn aspect_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.order.iter().filter_map(|id| self.inner.aspects.get(id)).map(|a| a.name)
    }

    #[must_use]
    pub fn aspect_count(&self) -> usize {
        self.inner.order.len()
    }
}

impl Deref for Platform {
    type Target = PlatformInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Default)]
pub struct PlatformBuilder {
    config: Option<HuntConfig>,
    slots: Option<SlotRegistry>,
    aspects: FxHashMap<TypeId, InitializedAspect>,
    order: Vec<TypeId>,
}

impl PlatformBuilder {
    #[must_use]
    pub fn config(mut self, config: HuntConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn slots(mut self, slots: SlotRegistry) -> Self {
        self.slots = Some(slots);
        self
    }

    /// Registers an aspect; registering the same aspect type twice keeps the first position.
    #[must_use]
    pub fn register_aspect(mut self, aspect: InitializedAspect) -> Self {
        if !self.aspects.contains_key(&aspect.id) {
            self.order.push(aspect.id);
        }
        self.aspects.insert(aspect.id, aspect);
        self
    }

    /// Registers multiple aspects at once.
    #[must_use]
    pub fn register_aspects<I>(self, aspects: I) -> Self
    where
        I: IntoIterator<Item = InitializedAspect>,
    {
        aspects.into_iter().fold(self, Self::register_aspect)
    }

    /// Freezes the composition.
    ///
    /// # Errors
    /// Returns [`PlatformError::Validation`] if no config was provided.
    pub fn build(self) -> Result<Platform, PlatformError> {
        let config = self.config.ok_or_else(|| PlatformError::Validation {
            message: "HuntConfig not provided".into(),
            context: None,
        })?;
        let slots = self.slots.unwrap_or_default();

        debug!(aspects = self.order.len(), contributions = slots.len(), "Platform composed");

        Ok(Platform {
            inner: Arc::new(PlatformInner {
                config,
                slots,
                aspects: self.aspects,
                order: self.order,
            }),
        })
    }
}
