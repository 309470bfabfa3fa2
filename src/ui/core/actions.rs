use chrono::NaiveDate;
use uuid::Uuid;

use crate::entities::{exercise, template};

/// Identifies a presentable screen the registry can construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenId {
    /// The modal add-exercise sheet
    AddExercise,
    /// Read-only details for one record
    ExerciseDetails(Uuid),
    /// The template catalog editor
    EditTemplates,
}

#[derive(Debug, Clone)]
pub enum Action {
    // List navigation
    NextRow,
    PreviousRow,

    // Record operations
    LogExercise {
        name: String,
        category: String,
    },
    DeleteExercise(Uuid),
    /// Delete the given row positions of one day's section. Row indices are
    /// resolved against that section's current bucket, not the global list.
    DeleteRows {
        day: NaiveDate,
        rows: Vec<usize>,
    },

    // Catalog operations
    CreateTemplate {
        name: String,
        category: String,
    },
    DeleteTemplate(Uuid),

    // Date filter
    SetDateFilter(NaiveDate),
    ClearDateFilter,

    // Data loading
    ReloadData,
    DataLoaded {
        exercises: Vec<exercise::Model>,
        templates: Vec<template::Model>,
    },

    // Screen navigation
    OpenScreen(ScreenId),
    CloseScreen,
    CloseSheet,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    DateFilter,
    DeleteConfirmation {
        day: NaiveDate,
        rows: Vec<usize>,
        label: String,
    },
    Error(String),
    Info(String),
    Help,
    Logs,
}
