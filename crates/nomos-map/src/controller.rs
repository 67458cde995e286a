//! Interactive date selection over the joined map.

use tracing::{info, instrument, warn};

use nomos_cases::{CaseTable, DateKey};
use nomos_geo::BoundaryTable;

use crate::{join_for_date, MapDocument, MapError};

/// Title prefix shown above the map; the selected date is appended.
pub const DEFAULT_TITLE: &str = "COVID-19 cases in Greece";

/// Display states of the interactive map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Showing a date and ready for the next selection.
    Idle,
    /// Rebuilding the displayed snapshot for a new selection.
    Refreshing,
}

/// Where rendered snapshots go.
///
/// Implemented by whatever hosts the map: a plotting backend in a
/// dashboard, a file sink in the CLI, a probe in tests.
pub trait RenderSurface {
    /// Show `document` under `title`.
    fn render(&mut self, title: &str, document: &MapDocument);
}

/// Drives the displayed map through date selections.
///
/// Holding the controller by `&mut` for each selection means at most
/// one selection is ever in flight; a rejected selection leaves the
/// displayed date, the title, and the state untouched.
pub struct MapController<'a, S: RenderSurface> {
    boundaries: &'a BoundaryTable,
    cases: &'a CaseTable,
    surface: S,
    title: String,
    state: ControllerState,
    current: DateKey,
}

impl<'a, S: RenderSurface> MapController<'a, S> {
    /// Create a controller and render the most recent date.
    ///
    /// # Errors
    ///
    /// Propagates [`join_for_date`] errors from the initial render.
    pub fn new(
        boundaries: &'a BoundaryTable,
        cases: &'a CaseTable,
        surface: S,
    ) -> Result<Self, MapError> {
        Self::with_title(boundaries, cases, surface, DEFAULT_TITLE)
    }

    /// Create a controller with a custom title prefix.
    ///
    /// # Errors
    ///
    /// Propagates [`join_for_date`] errors from the initial render.
    #[instrument(skip_all, fields(latest = %cases.latest()))]
    pub fn with_title(
        boundaries: &'a BoundaryTable,
        cases: &'a CaseTable,
        surface: S,
        title: impl Into<String>,
    ) -> Result<Self, MapError> {
        let latest = cases.latest();
        let mut controller = Self {
            boundaries,
            cases,
            surface,
            title: title.into(),
            state: ControllerState::Idle,
            current: latest,
        };
        controller.refresh(latest)?;
        Ok(controller)
    }

    /// Apply a date selection.
    ///
    /// On success the surface is handed a fresh snapshot under an
    /// updated title. On an unknown date nothing is rendered, the
    /// displayed date stays as it was, and the error is returned for
    /// the caller to report.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MapError::UnknownDate`] | `date` has no ingested case table |
    #[instrument(skip(self), fields(date = %date))]
    pub fn select(&mut self, date: DateKey) -> Result<(), MapError> {
        if !self.cases.contains(date) {
            warn!("selected date has no case table; display unchanged");
            return Err(MapError::UnknownDate { date });
        }
        self.refresh(date)
    }

    /// Join, serialize, and render `date`, then settle back to idle.
    ///
    /// The join runs before the state flips to refreshing, so a failed
    /// join leaves the controller idle on the old date.
    fn refresh(&mut self, date: DateKey) -> Result<(), MapError> {
        let snapshot = join_for_date(self.boundaries, self.cases, date)?;
        self.state = ControllerState::Refreshing;
        let document = MapDocument::from_snapshot(&snapshot);
        let title = format!("{}, {}", self.title, date);
        self.surface.render(&title, &document);
        self.current = date;
        self.state = ControllerState::Idle;
        info!(n_regions = snapshot.n_regions(), "map refreshed");
        Ok(())
    }

    /// The dates available for selection, in chronological order.
    #[must_use]
    pub fn dates(&self) -> Vec<DateKey> {
        self.cases.dates()
    }

    /// The date currently displayed.
    #[must_use]
    pub fn current(&self) -> DateKey {
        self.current
    }

    /// The current display state.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// The title prefix.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Borrow the render surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the controller, returning the render surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
