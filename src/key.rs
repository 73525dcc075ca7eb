//! The fixed key vocabulary of the comment widget.

use std::fmt;
use std::str::FromStr;

use crate::error::LocaleError;

/// A key the comment widget looks up in a locale table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WidgetKey {
    PostboxText,
    PostboxAuthor,
    PostboxEmail,
    PostboxWebsite,
    PostboxPreview,
    PostboxEdit,
    PostboxSubmit,
    PostboxNotification,
    NumComments,
    NoComments,
    CommentReply,
    CommentEdit,
    CommentSave,
    CommentDelete,
    CommentConfirm,
    CommentClose,
    CommentCancel,
    CommentDeleted,
    CommentQueued,
    CommentAnonymous,
    CommentHidden,
    DateNow,
    DateMinute,
    DateHour,
    DateDay,
    DateWeek,
    DateMonth,
    DateYear,
}

impl WidgetKey {
    /// Every key, in the order the widget's resource files list them.
    pub const ALL: [Self; 28] = [
        Self::PostboxText,
        Self::PostboxAuthor,
        Self::PostboxEmail,
        Self::PostboxWebsite,
        Self::PostboxPreview,
        Self::PostboxEdit,
        Self::PostboxSubmit,
        Self::PostboxNotification,
        Self::NumComments,
        Self::NoComments,
        Self::CommentReply,
        Self::CommentEdit,
        Self::CommentSave,
        Self::CommentDelete,
        Self::CommentConfirm,
        Self::CommentClose,
        Self::CommentCancel,
        Self::CommentDeleted,
        Self::CommentQueued,
        Self::CommentAnonymous,
        Self::CommentHidden,
        Self::DateNow,
        Self::DateMinute,
        Self::DateHour,
        Self::DateDay,
        Self::DateWeek,
        Self::DateMonth,
        Self::DateYear,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PostboxText => "postbox-text",
            Self::PostboxAuthor => "postbox-author",
            Self::PostboxEmail => "postbox-email",
            Self::PostboxWebsite => "postbox-website",
            Self::PostboxPreview => "postbox-preview",
            Self::PostboxEdit => "postbox-edit",
            Self::PostboxSubmit => "postbox-submit",
            Self::PostboxNotification => "postbox-notification",
            Self::NumComments => "num-comments",
            Self::NoComments => "no-comments",
            Self::CommentReply => "comment-reply",
            Self::CommentEdit => "comment-edit",
            Self::CommentSave => "comment-save",
            Self::CommentDelete => "comment-delete",
            Self::CommentConfirm => "comment-confirm",
            Self::CommentClose => "comment-close",
            Self::CommentCancel => "comment-cancel",
            Self::CommentDeleted => "comment-deleted",
            Self::CommentQueued => "comment-queued",
            Self::CommentAnonymous => "comment-anonymous",
            Self::CommentHidden => "comment-hidden",
            Self::DateNow => "date-now",
            Self::DateMinute => "date-minute",
            Self::DateHour => "date-hour",
            Self::DateDay => "date-day",
            Self::DateWeek => "date-week",
            Self::DateMonth => "date-month",
            Self::DateYear => "date-year",
        }
    }

    /// Whether the value carries singular and plural forms.
    #[must_use]
    pub const fn is_plural(self) -> bool {
        matches!(
            self,
            Self::NumComments
                | Self::CommentHidden
                | Self::DateMinute
                | Self::DateHour
                | Self::DateDay
                | Self::DateWeek
                | Self::DateMonth
                | Self::DateYear
        )
    }
}

impl fmt::Display for WidgetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetKey {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| LocaleError::UnknownKey(s.to_string()))
    }
}
