//! Capability contract: one implementation per supported release range
use crate::error::CapabilityError;
use crate::packet::TitleTimes;
use crate::target::CapabilityTarget;
use crate::version::VersionId;

/// One title/subtitle push. `None` leaves that line of the display untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub times: TitleTimes,
}

impl TitleRequest {
    pub fn new(title: Option<&str>, subtitle: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            subtitle: subtitle.map(str::to_string),
            times: TitleTimes::default(),
        }
    }

    pub fn with_times(mut self, fade_in: u32, stay: u32, fade_out: u32) -> Self {
        self.times = TitleTimes::new(fade_in, stay, fade_out);
        self
    }
}

/// Stable capability surface over a release-specific session and wire layout.
pub trait CapabilityAdapter: Send + Sync {
    /// Adapter id used in logs (ex: "v1_9")
    fn name(&self) -> &'static str;

    /// One-time probe run on first resolution for `version`.
    fn bind(&self, _version: &VersionId) -> Result<(), CapabilityError> {
        Ok(())
    }

    /// Reported locale tag, empty when the client has not sent one.
    fn locale(&self, target: &dyn CapabilityTarget) -> String {
        target.locale().unwrap_or_default()
    }

    /// Latency in milliseconds; unmeasured or negative reads as 0.
    fn ping(&self, target: &dyn CapabilityTarget) -> i32 {
        target.latency().filter(|ms| *ms >= 0).unwrap_or(0)
    }

    fn send_action_bar(&self, target: &dyn CapabilityTarget, text: &str)
        -> Result<(), CapabilityError>;

    /// Emits Times, then Subtitle, then Title.
    fn send_title(
        &self,
        target: &dyn CapabilityTarget,
        request: &TitleRequest,
    ) -> Result<(), CapabilityError>;

    fn clear_title(&self, target: &dyn CapabilityTarget) -> Result<(), CapabilityError>;

    /// Clears the title and restores the client's default timings.
    fn reset_title(&self, target: &dyn CapabilityTarget) -> Result<(), CapabilityError>;
}
