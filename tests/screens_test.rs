use std::sync::Arc;
use uuid::Uuid;

use repscount::config::DisplayConfig;
use repscount::haptics::SilentHaptics;
use repscount::ui::core::actions::ScreenId;
use repscount::ui::screens::{Screen, ScreenContext, ScreenError, ScreenKind, ScreenRegistry};

fn context<'a>() -> ScreenContext<'a> {
    ScreenContext {
        exercises: &[],
        templates: &[],
        display: DisplayConfig::default(),
        haptics: Arc::new(SilentHaptics),
    }
}

#[test]
fn test_empty_registry_resolves_nothing() {
    let registry = ScreenRegistry::new();

    let result = registry.resolve(&ScreenId::EditTemplates, &context());
    assert!(matches!(result, Err(ScreenError::NotRegistered(ScreenKind::EditTemplates))));

    let err = registry.resolve(&ScreenId::AddExercise, &context()).unwrap_err();
    assert!(err.to_string().contains("not registered"));
}

#[test]
fn test_default_registry_builds_every_screen() {
    let registry = ScreenRegistry::with_defaults();

    assert!(registry.is_registered(ScreenKind::AddExercise));
    assert!(registry.is_registered(ScreenKind::ExerciseDetails));
    assert!(registry.is_registered(ScreenKind::EditTemplates));

    assert!(matches!(
        registry.resolve(&ScreenId::AddExercise, &context()),
        Ok(Screen::AddExercise(_))
    ));
    assert!(matches!(
        registry.resolve(&ScreenId::EditTemplates, &context()),
        Ok(Screen::EditTemplates(_))
    ));
}

#[test]
fn test_details_screen_resolves_even_for_unknown_identity() {
    // An identity with no backing record still constructs the screen; the
    // component shows its own not-found state.
    let registry = ScreenRegistry::with_defaults();

    let result = registry.resolve(&ScreenId::ExerciseDetails(Uuid::new_v4()), &context());
    assert!(matches!(result, Ok(Screen::ExerciseDetails(_))));
}

#[test]
fn test_screen_id_kind_strips_arguments() {
    assert_eq!(ScreenId::AddExercise.kind(), ScreenKind::AddExercise);
    assert_eq!(
        ScreenId::ExerciseDetails(Uuid::new_v4()).kind(),
        ScreenKind::ExerciseDetails
    );
    assert_eq!(ScreenId::EditTemplates.kind(), ScreenKind::EditTemplates);
}
