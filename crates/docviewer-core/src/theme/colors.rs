//! Well-known renderer color variable names.

use std::fmt;

/// The closed set of color variables the renderer is known to read.
///
/// Each name maps onto the CSS property `--color-<name>`. The raw-string
/// escape hatch on [`super::ColorScheme`] covers renderer additions that
/// have not been promoted here yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorVar {
    ArticleBackground,
    ArticleBodyBackground,
    AsideNote,
    AsideNoteBackground,
    AsideNoteBorder,
    AsideTip,
    AsideTipBackground,
    AsideTipBorder,
    AsideWarning,
    AsideWarningBackground,
    AsideWarningBorder,
    AsideImportant,
    AsideImportantBackground,
    AsideImportantBorder,
    AsideDeprecated,
    AsideDeprecatedBackground,
    AsideDeprecatedBorder,
    BadgeDefault,
    BadgeBeta,
    BadgeDeprecated,
    ButtonBackground,
    ButtonBackgroundActive,
    ButtonBackgroundHover,
    ButtonBorder,
    ButtonText,
    CallToActionBackground,
    DocumentationIntroFill,
    DocumentationIntroTitle,
    Fill,
    FillSecondary,
    Figure,
    Grid,
    HeaderText,
    HighlightGreen,
    HighlightRed,
    Link,
    LoadingPlaceholder,
    NavColor,
    NavCurrentColor,
    RuntimePreviewBackground,
    SecondaryLabel,
    StepBackground,
    SvgIcon,
    TabnavItemBorderColor,
    Text,
    TextBackground,
    TutorialsOverviewBackground,
    TypeIconBlue,
    TypeIconGreen,
    TypeIconOrange,
    TypeIconPurple,
}

impl ColorVar {
    /// The variable name as the renderer spells it (without the
    /// `--color-` prefix).
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorVar::ArticleBackground => "article-background",
            ColorVar::ArticleBodyBackground => "article-body-background",
            ColorVar::AsideNote => "aside-note",
            ColorVar::AsideNoteBackground => "aside-note-background",
            ColorVar::AsideNoteBorder => "aside-note-border",
            ColorVar::AsideTip => "aside-tip",
            ColorVar::AsideTipBackground => "aside-tip-background",
            ColorVar::AsideTipBorder => "aside-tip-border",
            ColorVar::AsideWarning => "aside-warning",
            ColorVar::AsideWarningBackground => "aside-warning-background",
            ColorVar::AsideWarningBorder => "aside-warning-border",
            ColorVar::AsideImportant => "aside-important",
            ColorVar::AsideImportantBackground => "aside-important-background",
            ColorVar::AsideImportantBorder => "aside-important-border",
            ColorVar::AsideDeprecated => "aside-deprecated",
            ColorVar::AsideDeprecatedBackground => "aside-deprecated-background",
            ColorVar::AsideDeprecatedBorder => "aside-deprecated-border",
            ColorVar::BadgeDefault => "badge-default",
            ColorVar::BadgeBeta => "badge-beta",
            ColorVar::BadgeDeprecated => "badge-deprecated",
            ColorVar::ButtonBackground => "button-background",
            ColorVar::ButtonBackgroundActive => "button-background-active",
            ColorVar::ButtonBackgroundHover => "button-background-hover",
            ColorVar::ButtonBorder => "button-border",
            ColorVar::ButtonText => "button-text",
            ColorVar::CallToActionBackground => "call-to-action-background",
            ColorVar::DocumentationIntroFill => "documentation-intro-fill",
            ColorVar::DocumentationIntroTitle => "documentation-intro-title",
            ColorVar::Fill => "fill",
            ColorVar::FillSecondary => "fill-secondary",
            ColorVar::Figure => "figure",
            ColorVar::Grid => "grid",
            ColorVar::HeaderText => "header-text",
            ColorVar::HighlightGreen => "highlight-green",
            ColorVar::HighlightRed => "highlight-red",
            ColorVar::Link => "link",
            ColorVar::LoadingPlaceholder => "loading-placeholder",
            ColorVar::NavColor => "nav-color",
            ColorVar::NavCurrentColor => "nav-current-color",
            ColorVar::RuntimePreviewBackground => "runtime-preview-background",
            ColorVar::SecondaryLabel => "secondary-label",
            ColorVar::StepBackground => "step-background",
            ColorVar::SvgIcon => "svg-icon",
            ColorVar::TabnavItemBorderColor => "tabnav-item-border-color",
            ColorVar::Text => "text",
            ColorVar::TextBackground => "text-background",
            ColorVar::TutorialsOverviewBackground => "tutorials-overview-background",
            ColorVar::TypeIconBlue => "type-icon-blue",
            ColorVar::TypeIconGreen => "type-icon-green",
            ColorVar::TypeIconOrange => "type-icon-orange",
            ColorVar::TypeIconPurple => "type-icon-purple",
        }
    }

    /// The full CSS custom property the renderer materializes.
    pub fn css_property(&self) -> String {
        format!("--color-{}", self.as_str())
    }
}

impl fmt::Display for ColorVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
