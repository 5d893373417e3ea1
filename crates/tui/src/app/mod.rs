use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use uuid::Uuid;

use engine::{CategoryFilter, EngineError, Planner, Trip};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    export, ui,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Itinerary,
    Budget,
    Checklist,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Itinerary => "Itinerary",
            Self::Budget => "Budget",
            Self::Checklist => "Checklist",
        }
    }
}

#[derive(Debug, Default)]
pub struct ItineraryState {
    /// Index into the derived day partition, clamped on use so day
    /// deletions never leave it dangling.
    pub day_index: usize,
    pub selected: usize,
}

#[derive(Debug, Default)]
pub struct BudgetState {
    pub selected: usize,
}

#[derive(Debug, Default)]
pub struct ChecklistState {
    pub filter: CategoryFilter,
    pub selected: usize,
}

#[derive(Debug)]
pub struct AppState {
    pub trip_id: Uuid,
    pub section: Section,
    pub itinerary: ItineraryState,
    pub budget: BudgetState,
    pub checklist: ChecklistState,
    /// One-line feedback (rejected reorder, export result, ...).
    pub status: Option<String>,
}

pub struct App {
    pub planner: Planner,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, planner: Planner) -> Result<Self> {
        let trip_id = match &config.trip {
            Some(name) => {
                planner
                    .trip_by_name(name)
                    .ok_or_else(|| EngineError::KeyNotFound(name.clone()))?
                    .id
            }
            None => planner.recent_trip().ok_or(AppError::NoTrips)?.id,
        };

        let state = AppState {
            trip_id,
            section: Section::Overview,
            itinerary: ItineraryState::default(),
            budget: BudgetState::default(),
            checklist: ChecklistState::default(),
            status: None,
        };

        Ok(Self {
            planner,
            state,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state, &self.planner))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key)?,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match ui::keymap::map_key(key) {
            ui::keymap::AppAction::Quit => {
                self.should_quit = true;
            }
            ui::keymap::AppAction::Cancel => {
                self.state.status = None;
            }
            ui::keymap::AppAction::Submit => {
                if self.state.section == Section::Checklist {
                    self.toggle_selected()?;
                }
            }
            ui::keymap::AppAction::Up => self.move_selection(-1)?,
            ui::keymap::AppAction::Down => self.move_selection(1)?,
            ui::keymap::AppAction::Left => self.change_day(-1)?,
            ui::keymap::AppAction::Right => self.change_day(1)?,
            ui::keymap::AppAction::Input(ch) => self.handle_char(ch)?,
            ui::keymap::AppAction::None => {}
        }

        Ok(())
    }

    fn handle_char(&mut self, ch: char) -> Result<()> {
        match ch {
            'o' | 'O' => self.state.section = Section::Overview,
            'i' | 'I' => self.state.section = Section::Itinerary,
            'b' | 'B' => self.state.section = Section::Budget,
            'c' | 'C' => self.state.section = Section::Checklist,
            't' | 'T' => self.next_trip(),
            'j' => self.move_selection(1)?,
            'k' => self.move_selection(-1)?,
            // Shifted j/k is the reorder gesture.
            'J' => self.move_activity(1)?,
            'K' => self.move_activity(-1)?,
            '[' => self.change_day(-1)?,
            ']' => self.change_day(1)?,
            'd' | 'D' => self.delete_selected()?,
            ' ' => {
                if self.state.section == Section::Checklist {
                    self.toggle_selected()?;
                }
            }
            'f' | 'F' => self.cycle_filter()?,
            'x' | 'X' => {
                if self.state.section == Section::Budget {
                    self.export_expenses()?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn trip(&self) -> Result<&Trip> {
        Ok(self.planner.trip(self.state.trip_id)?)
    }

    /// The day currently shown in the itinerary, if the trip has any.
    fn current_day(&self) -> Result<Option<u32>> {
        let days = self.trip()?.itinerary().days();
        if days.is_empty() {
            return Ok(None);
        }
        let index = self.state.itinerary.day_index.min(days.len() - 1);
        Ok(Some(days[index]))
    }

    /// Length of the list the current section is scrolling through.
    fn section_len(&self) -> Result<usize> {
        let trip = self.trip()?;
        Ok(match self.state.section {
            Section::Overview => 0,
            Section::Itinerary => match self.current_day()? {
                Some(day) => trip.itinerary().for_day(day).len(),
                None => 0,
            },
            Section::Budget => trip.expenses().len(),
            Section::Checklist => trip.checklist_filtered(&self.state.checklist.filter).len(),
        })
    }

    fn move_selection(&mut self, delta: i32) -> Result<()> {
        let len = self.section_len()?;
        if len == 0 {
            return Ok(());
        }

        let slot = match self.state.section {
            Section::Overview => return Ok(()),
            Section::Itinerary => &mut self.state.itinerary.selected,
            Section::Budget => &mut self.state.budget.selected,
            Section::Checklist => &mut self.state.checklist.selected,
        };
        let current = (*slot).min(len - 1);
        *slot = if delta < 0 {
            current.saturating_sub(1)
        } else {
            (current + 1).min(len - 1)
        };
        Ok(())
    }

    fn change_day(&mut self, delta: i32) -> Result<()> {
        if self.state.section != Section::Itinerary {
            return Ok(());
        }
        let count = self.trip()?.itinerary().days().len();
        if count == 0 {
            return Ok(());
        }

        let current = self.state.itinerary.day_index.min(count - 1);
        self.state.itinerary.day_index = if delta < 0 {
            current.saturating_sub(1)
        } else {
            (current + 1).min(count - 1)
        };
        self.state.itinerary.selected = 0;
        Ok(())
    }

    /// Moves the selected activity one slot up or down within its day.
    fn move_activity(&mut self, delta: i32) -> Result<()> {
        if self.state.section != Section::Itinerary {
            return Ok(());
        }
        let Some(day) = self.current_day()? else {
            return Ok(());
        };
        let len = self.trip()?.itinerary().for_day(day).len();
        if len == 0 {
            return Ok(());
        }

        let from = self.state.itinerary.selected.min(len - 1);
        let to = if delta < 0 {
            from.saturating_sub(1)
        } else {
            (from + 1).min(len - 1)
        };
        if from == to {
            return Ok(());
        }

        match self
            .planner
            .reorder_activity(self.state.trip_id, day, from, to)
        {
            Ok(()) => {
                self.state.itinerary.selected = to;
                self.state.status = None;
            }
            // A rejected reorder leaves the schedule untouched; tell the
            // user instead of pretending something moved.
            Err(err) => self.state.status = Some(err.to_string()),
        }
        Ok(())
    }

    fn delete_selected(&mut self) -> Result<()> {
        match self.state.section {
            Section::Overview => return Ok(()),
            Section::Itinerary => {
                let id = {
                    let Some(day) = self.current_day()? else {
                        return Ok(());
                    };
                    let view = self.trip()?.itinerary().for_day(day);
                    match view.get(self.state.itinerary.selected.min(view.len().saturating_sub(1)))
                    {
                        Some(activity) => activity.id,
                        None => return Ok(()),
                    }
                };
                self.planner.remove_activity(self.state.trip_id, id)?;
            }
            Section::Budget => {
                let id = {
                    let expenses = self.trip()?.expenses();
                    match expenses.get(self.state.budget.selected.min(expenses.len().saturating_sub(1))) {
                        Some(expense) => expense.id,
                        None => return Ok(()),
                    }
                };
                self.planner.remove_expense(self.state.trip_id, id)?;
            }
            Section::Checklist => {
                let id = {
                    let trip = self.trip()?;
                    let filtered = trip.checklist_filtered(&self.state.checklist.filter);
                    match filtered
                        .get(self.state.checklist.selected.min(filtered.len().saturating_sub(1)))
                    {
                        Some(item) => item.id,
                        None => return Ok(()),
                    }
                };
                self.planner.remove_item(self.state.trip_id, id)?;
            }
        }

        // Keep the cursor inside the shrunken list.
        let len = self.section_len()?;
        let slot = match self.state.section {
            Section::Overview => return Ok(()),
            Section::Itinerary => &mut self.state.itinerary.selected,
            Section::Budget => &mut self.state.budget.selected,
            Section::Checklist => &mut self.state.checklist.selected,
        };
        *slot = (*slot).min(len.saturating_sub(1));
        Ok(())
    }

    fn toggle_selected(&mut self) -> Result<()> {
        let id = {
            let trip = self.trip()?;
            let filtered = trip.checklist_filtered(&self.state.checklist.filter);
            match filtered
                .get(self.state.checklist.selected.min(filtered.len().saturating_sub(1)))
            {
                Some(item) => item.id,
                None => return Ok(()),
            }
        };
        self.planner.toggle_item(self.state.trip_id, id)?;
        Ok(())
    }

    /// Cycles all -> first category -> ... -> last category -> all.
    fn cycle_filter(&mut self) -> Result<()> {
        if self.state.section != Section::Checklist {
            return Ok(());
        }

        let labels: Vec<String> = {
            let overview = self.trip()?.checklist_overview();
            std::iter::once("all".to_string())
                .chain(overview.categories.into_iter().map(|entry| entry.name))
                .collect()
        };
        let current = labels
            .iter()
            .position(|label| label.as_str() == self.state.checklist.filter.label())
            .unwrap_or(0);
        let next = (current + 1) % labels.len();

        self.state.checklist.filter = CategoryFilter::parse(&labels[next]);
        self.state.checklist.selected = 0;
        Ok(())
    }

    fn export_expenses(&mut self) -> Result<()> {
        let path = export::write_expenses(self.trip()?)?;
        self.state.status = Some(format!("exported {}", path.display()));
        Ok(())
    }

    fn next_trip(&mut self) {
        let next = {
            let trips = self.planner.trips();
            if trips.is_empty() {
                return;
            }
            let index = trips
                .iter()
                .position(|trip| trip.id == self.state.trip_id)
                .unwrap_or(0);
            trips[(index + 1) % trips.len()].id
        };

        if next != self.state.trip_id {
            self.state.trip_id = next;
            self.state.itinerary = ItineraryState::default();
            self.state.budget = BudgetState::default();
            self.state.checklist = ChecklistState::default();
            self.state.status = None;
        }
    }
}
