use formats::Route;

/// The airline highlight state. At most one airline is selected at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Airline(String),
}

/// Owns the selection state and derives the route subset it implies.
///
/// Transitions are driven by pointer enter/leave on chart bars. The
/// controller never touches presentation; restyling the hovered bar is the
/// render coordinator's business.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionController {
    selection: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `airline_id` already selected, so the map is not empty
    /// before the first hover.
    pub fn with_airline(airline_id: impl Into<String>) -> Self {
        Self {
            selection: Selection::Airline(airline_id.into()),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_airline(&self) -> Option<&str> {
        match &self.selection {
            Selection::None => None,
            Selection::Airline(id) => Some(id),
        }
    }

    /// Pointer-enter transition: any state becomes `Airline(airline_id)`.
    ///
    /// Returns `true` if the state changed.
    pub fn select_airline(&mut self, airline_id: impl Into<String>) -> bool {
        let next = Selection::Airline(airline_id.into());
        if self.selection == next {
            return false;
        }
        self.selection = next;
        true
    }

    /// Pointer-leave transition back to no selection.
    ///
    /// Returns `true` if the state changed.
    pub fn clear(&mut self) -> bool {
        if self.selection == Selection::None {
            return false;
        }
        self.selection = Selection::None;
        true
    }

    /// The routes the map should show for the current state: every route of
    /// the selected airline, or nothing.
    ///
    /// Pure recomputation from the full route list; nothing carries over
    /// from a previous selection.
    pub fn routes_for<'a>(&self, routes: &'a [Route]) -> Vec<&'a Route> {
        match &self.selection {
            Selection::None => Vec::new(),
            Selection::Airline(id) => routes
                .iter()
                .filter(|route| &route.airline_id == id)
                .collect(),
        }
    }
}
