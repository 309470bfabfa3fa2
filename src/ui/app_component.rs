//! Top-level application component.
//!
//! Composes the list screen, the modal layers, and the screen registry;
//! interprets every [`Action`] against the store. Store mutations run as
//! background tasks whose completions drain back in over the action
//! channel, so no key handler ever waits on the database.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::config::Config;
use crate::constants::STATUS_BAR_HEIGHT;
use crate::entities::{exercise, template};
use crate::haptics::{self, HapticFeedback};
use crate::logger::Logger;
use crate::storage::ExerciseStore;
use crate::ui::components::{AddExerciseSheet, DialogComponent, ExerciseListComponent, StatusBar};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::screens::{Screen, ScreenContext, ScreenRegistry};
use crate::ui::view_state::resolve_section_rows;
use crate::utils::datetime;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub exercises: Vec<exercise::Model>,
    pub templates: Vec<template::Model>,
    pub date_filter: Option<NaiveDate>,
    pub loading: bool,
}

pub struct AppComponent {
    // Component composition
    list: ExerciseListComponent,
    dialog: DialogComponent,
    sheet: Option<AddExerciseSheet>,
    active_screen: Option<Screen>,
    registry: ScreenRegistry,

    // Application state
    state: AppState,

    // Services
    store: Arc<dyn ExerciseStore>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    haptics: Arc<dyn HapticFeedback>,
    config: Config,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(store: Arc<dyn ExerciseStore>, config: Config) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let logger = Logger::new();
        let haptics = haptics::from_config(config.ui.haptics_enabled);

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let state = AppState {
            loading: true,
            ..Default::default()
        };

        Self {
            list: ExerciseListComponent::new(config.display.clone()),
            dialog,
            sheet: None,
            active_screen: None,
            registry: ScreenRegistry::with_defaults(),
            state,
            store,
            task_manager,
            background_action_rx,
            logger,
            haptics,
            config,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Check if any background operations are running
    pub fn is_busy(&self) -> bool {
        self.task_manager.task_count() > 0
    }

    /// Kick off the first read of the collection on startup.
    pub fn trigger_initial_load(&mut self) {
        self.logger.log("App: Loading initial data".to_string());
        self.schedule_data_fetch();
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.list
            .update_data(self.state.exercises.clone(), self.state.date_filter);
        self.dialog.set_date_filter_active(self.state.date_filter.is_some());

        if let Some(sheet) = &mut self.sheet {
            sheet.update_templates(self.state.templates.clone());
        }
        if let Some(Screen::EditTemplates(editor)) = &mut self.active_screen {
            editor.update_data(self.state.templates.clone());
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::OpenScreen(id) => {
                // Leaving the add sheet for any screen closes it in the
                // same update, so "go to the editor" is one atomic step.
                self.sheet = None;
                let ctx = ScreenContext {
                    exercises: &self.state.exercises,
                    templates: &self.state.templates,
                    display: self.config.display.clone(),
                    haptics: self.haptics.clone(),
                };
                match self.registry.resolve(&id, &ctx) {
                    Ok(Screen::AddExercise(sheet)) => {
                        self.logger.log("Navigation: Opening add-exercise sheet".to_string());
                        self.sheet = Some(sheet);
                    }
                    Ok(screen) => {
                        self.logger.log(format!("Navigation: Opening screen {id:?}"));
                        self.active_screen = Some(screen);
                    }
                    Err(e) => {
                        self.logger.log(format!("Navigation: {e}"));
                        self.dialog.show(DialogType::Error(e.to_string()));
                    }
                }
            }
            Action::CloseScreen => {
                self.active_screen = None;
            }
            Action::CloseSheet => {
                self.sheet = None;
            }
            Action::LogExercise { name, category } => {
                self.logger.log(format!("Exercise: Logging '{name}' ({category})"));
                self.sheet = None;
                self.spawn_log_exercise(name, category);
            }
            Action::DeleteRows { day, rows } => {
                self.dialog.hide();
                // Row positions are resolved against the day's current
                // bucket, one delete request per record.
                let uuids = resolve_section_rows(&self.list.view, day, &rows);
                self.logger
                    .log(format!("Exercise: Deleting {} record(s) on {day}", uuids.len()));
                for uuid in uuids {
                    self.spawn_delete_exercise(uuid);
                }
            }
            Action::DeleteExercise(uuid) => {
                self.logger.log(format!("Exercise: Deleting record {uuid}"));
                self.active_screen = None;
                self.spawn_delete_exercise(uuid);
            }
            Action::CreateTemplate { name, category } => {
                self.logger.log(format!("Catalog: Creating template '{name}' ({category})"));
                self.spawn_create_template(name, category);
            }
            Action::DeleteTemplate(uuid) => {
                self.logger.log(format!("Catalog: Deleting template {uuid}"));
                self.spawn_delete_template(uuid);
            }
            Action::SetDateFilter(day) => {
                self.logger.log(format!("Filter: Showing only {day}"));
                self.dialog.hide();
                self.state.date_filter = Some(day);
                self.sync_component_data();
            }
            Action::ClearDateFilter => {
                self.logger.log("Filter: Cleared".to_string());
                self.dialog.hide();
                self.state.date_filter = None;
                self.sync_component_data();
            }
            Action::ReloadData => {
                self.schedule_data_fetch();
            }
            Action::DataLoaded { exercises, templates } => {
                self.logger.log(format!(
                    "Data: Loaded {} exercises, {} templates",
                    exercises.len(),
                    templates.len()
                ));
                self.state.exercises = exercises;
                self.state.templates = templates;
                self.state.loading = false;
                self.sync_component_data();
            }
            Action::ShowDialog(dialog_type) => {
                self.dialog.show(dialog_type);
            }
            Action::HideDialog => {
                self.dialog.hide();
            }
            _ => {}
        }
    }

    fn spawn_log_exercise(&mut self, name: String, category: String) {
        let store = self.store.clone();
        let timestamp = datetime::to_stored_timestamp(Local::now());
        self.task_manager.spawn_store_operation(
            move || async move {
                let record = store.insert_exercise(&name, &category, Some(timestamp)).await?;
                Ok(format!("Logged {}", record.name))
            },
            "Log exercise".to_string(),
        );
    }

    fn spawn_delete_exercise(&mut self, uuid: Uuid) {
        let store = self.store.clone();
        self.task_manager.spawn_store_operation(
            move || async move {
                store.delete_exercise(&uuid).await?;
                Ok(format!("Deleted {uuid}"))
            },
            "Delete exercise".to_string(),
        );
    }

    fn spawn_create_template(&mut self, name: String, category: String) {
        let store = self.store.clone();
        self.task_manager.spawn_store_operation(
            move || async move {
                let template = store.insert_template(&name, &category).await?;
                Ok(format!("Created {}", template.name))
            },
            "Create template".to_string(),
        );
    }

    fn spawn_delete_template(&mut self, uuid: Uuid) {
        let store = self.store.clone();
        self.task_manager.spawn_store_operation(
            move || async move {
                store.delete_template(&uuid).await?;
                Ok(format!("Deleted template {uuid}"))
            },
            "Delete template".to_string(),
        );
    }

    /// Schedule a background task to fetch data
    fn schedule_data_fetch(&mut self) {
        let _task_id = self.task_manager.spawn_data_load(self.store.clone());
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        self.task_manager.cleanup_finished_tasks();

        actions
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                // Modal layers take priority: dialog, then sheet, then a
                // pushed screen, then the list plus global keys.
                if self.dialog.is_visible() {
                    self.dialog.handle_key_events(key)
                } else if let Some(sheet) = &mut self.sheet {
                    sheet.handle_key_events(key)
                } else if let Some(screen) = &mut self.active_screen {
                    match screen {
                        Screen::AddExercise(c) => c.handle_key_events(key),
                        Screen::ExerciseDetails(c) => c.handle_key_events(key),
                        Screen::EditTemplates(c) => c.handle_key_events(key),
                    }
                } else {
                    let list_action = self.list.handle_key_events(key);
                    if !matches!(list_action, Action::None) {
                        list_action
                    } else {
                        self.handle_global_key(key)
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Render | EventType::Other => Action::None,
        };

        self.dispatch(action);
        Ok(())
    }

    /// Route an action through the component chain, then interpret it.
    pub fn dispatch(&mut self, action: Action) {
        // Respect the confirm_delete setting by short-circuiting the dialog
        let action = match action {
            Action::ShowDialog(DialogType::DeleteConfirmation { day, rows, .. })
                if !self.config.ui.confirm_delete =>
            {
                Action::DeleteRows { day, rows }
            }
            other => other,
        };

        let action = self.list.update(action);
        self.handle_app_action(action);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)]).split(rect);

        match &mut self.active_screen {
            Some(Screen::ExerciseDetails(screen)) => screen.render(f, chunks[0]),
            Some(Screen::EditTemplates(screen)) => screen.render(f, chunks[0]),
            Some(Screen::AddExercise(screen)) => screen.render(f, chunks[0]),
            None => self.list.render(f, chunks[0]),
        }

        StatusBar::render(f, chunks[1], self.state.date_filter, self.state.loading, self.is_busy());

        // Modal layers on top
        if let Some(sheet) = &mut self.sheet {
            sheet.render(f, rect);
        }
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
