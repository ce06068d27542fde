use tracing::{debug, warn};

use crate::error::{DietError, Result};
use crate::models::{BiometricForm, DietPlan};
use crate::planner::calculate_diet_plan;
use crate::suggestions::{
    FALLBACK_MESSAGE, MealSuggester, SuggestionError, SuggestionFilters, SuggestionRequest,
};

/// Everything the front end shows: form inputs, the derived plan and any
/// fetched suggestions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    form: BiometricForm,
    plan: Option<DietPlan>,
    suggestions: Option<String>,
    loading: bool,
    filters: SuggestionFilters,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &BiometricForm {
        &self.form
    }

    /// Edit inputs. The plan is not recomputed until [`Session::calculate`].
    pub fn form_mut(&mut self) -> &mut BiometricForm {
        &mut self.form
    }

    pub fn plan(&self) -> Option<&DietPlan> {
        self.plan.as_ref()
    }

    pub fn suggestions(&self) -> Option<&str> {
        self.suggestions.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn filters(&self) -> &SuggestionFilters {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: SuggestionFilters) {
        self.filters = filters;
    }

    /// Validate the form and replace the plan.
    ///
    /// On a validation error nothing changes.
    pub fn calculate(&mut self) -> Result<&DietPlan> {
        let plan = calculate_diet_plan(&self.form)?;
        debug!(daily_calories = plan.daily_calories, "plan recalculated");
        Ok(&*self.plan.insert(plan))
    }

    /// Mark a fetch as pending and return what to send.
    pub fn begin_fetch(&mut self) -> Result<SuggestionRequest> {
        let plan = self.plan.as_ref().ok_or(DietError::NoPlan)?;
        let request = SuggestionRequest::from_plan(plan, self.filters.clone());
        self.loading = true;
        Ok(request)
    }

    /// Store the outcome of a fetch. Errors become the fallback message.
    pub fn finish_fetch(&mut self, outcome: std::result::Result<String, SuggestionError>) -> &str {
        let text = match outcome {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "meal suggestion fetch failed");
                FALLBACK_MESSAGE.to_string()
            }
        };
        self.loading = false;
        self.suggestions.insert(text).as_str()
    }

    /// Abandon a pending fetch, keeping any earlier suggestions.
    pub fn cancel_fetch(&mut self) {
        if self.loading {
            debug!("meal suggestion fetch cancelled");
        }
        self.loading = false;
    }

    /// Begin, run and finish a fetch in one go.
    pub async fn fetch_suggestions(&mut self, suggester: &dyn MealSuggester) -> Result<&str> {
        let request = self.begin_fetch()?;
        let outcome = suggester.suggest(&request).await;
        Ok(self.finish_fetch(outcome))
    }

    /// Back to the initial form with no derived state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
