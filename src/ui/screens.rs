//! Screen construction registry.
//!
//! Presentable units (the add sheet, the details screen, the catalog
//! editor) are built by factories looked up in a [`ScreenRegistry`].
//! Resolution returns a `Result`: asking for a screen kind nothing
//! registered is an error the caller surfaces, not a panic.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::DisplayConfig;
use crate::entities::{exercise, template};
use crate::haptics::HapticFeedback;
use crate::ui::components::{
    AddExerciseConfig, AddExerciseSheet, ExerciseDetailsComponent, TemplateEditorComponent,
};
use crate::ui::core::actions::{Action, ScreenId};

/// The registry key: a screen id stripped of its construction argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    AddExercise,
    ExerciseDetails,
    EditTemplates,
}

impl ScreenId {
    pub fn kind(&self) -> ScreenKind {
        match self {
            ScreenId::AddExercise => ScreenKind::AddExercise,
            ScreenId::ExerciseDetails(_) => ScreenKind::ExerciseDetails,
            ScreenId::EditTemplates => ScreenKind::EditTemplates,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("Screen not registered: {0:?}")]
    NotRegistered(ScreenKind),
}

/// Data a factory may need to construct its screen.
pub struct ScreenContext<'a> {
    pub exercises: &'a [exercise::Model],
    pub templates: &'a [template::Model],
    pub display: DisplayConfig,
    pub haptics: Arc<dyn HapticFeedback>,
}

/// A constructed, presentable screen.
pub enum Screen {
    AddExercise(AddExerciseSheet),
    ExerciseDetails(ExerciseDetailsComponent),
    EditTemplates(TemplateEditorComponent),
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Screen::AddExercise(_) => "AddExercise",
            Screen::ExerciseDetails(_) => "ExerciseDetails",
            Screen::EditTemplates(_) => "EditTemplates",
        };
        f.debug_tuple(name).finish()
    }
}

type ScreenFactory = Box<dyn Fn(&ScreenId, &ScreenContext) -> Screen + Send>;

pub struct ScreenRegistry {
    factories: HashMap<ScreenKind, ScreenFactory>,
}

impl ScreenRegistry {
    /// An empty registry: every resolution fails until factories register.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// A registry with all application screens registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(ScreenKind::AddExercise, |_id: &ScreenId, ctx: &ScreenContext| {
            let config = AddExerciseConfig {
                templates: ctx.templates.to_vec(),
                on_leave_for_editor: Action::OpenScreen(ScreenId::EditTemplates),
            };
            Screen::AddExercise(AddExerciseSheet::new(config, ctx.haptics.clone()))
        });

        registry.register(ScreenKind::ExerciseDetails, |id: &ScreenId, ctx: &ScreenContext| {
            let record = match id {
                ScreenId::ExerciseDetails(uuid) => {
                    let wanted = uuid.to_string();
                    ctx.exercises.iter().find(|e| e.uuid == wanted).cloned()
                }
                _ => None,
            };
            Screen::ExerciseDetails(ExerciseDetailsComponent::new(record, ctx.display.clone()))
        });

        registry.register(ScreenKind::EditTemplates, |_id: &ScreenId, ctx: &ScreenContext| {
            Screen::EditTemplates(TemplateEditorComponent::new(ctx.templates.to_vec(), ctx.haptics.clone()))
        });

        registry
    }

    pub fn register<F>(&mut self, kind: ScreenKind, factory: F)
    where
        F: Fn(&ScreenId, &ScreenContext) -> Screen + Send + 'static,
    {
        self.factories.insert(kind, Box::new(factory));
    }

    pub fn is_registered(&self, kind: ScreenKind) -> bool {
        self.factories.contains_key(&kind)
    }

    /// Construct the screen for `id`, or report that nothing can.
    pub fn resolve(&self, id: &ScreenId, ctx: &ScreenContext) -> Result<Screen, ScreenError> {
        let kind = id.kind();
        let factory = self.factories.get(&kind).ok_or(ScreenError::NotRegistered(kind))?;
        Ok(factory(id, ctx))
    }
}

impl Default for ScreenRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
