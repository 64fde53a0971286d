//! Pluggable presentation for the portal views.
//!
//! The same view tree is rendered either with utility classes (expects the
//! Tailwind stylesheet from `index.html`) or with self-contained inline
//! styles. Each element asks for its [`Slot`] and applies both `class` and
//! `style`; exactly one of them is non-empty.

/// Presentation flavour
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Presentation {
    #[default]
    Classes,
    Inline,
}

/// Visual slot of the portal page
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Slot {
    Page,
    Card,
    Title,
    SessionBar,
    SignInButton,
    SignOutButton,
    Section,
    Subtitle,
    Form,
    Label,
    DropZoneWrap,
    DropZone,
    DropZoneActive,
    DropZoneBody,
    DropZoneIcon,
    DropHint,
    FileHint,
    HiddenInput,
    SubmitButton,
    SubmitButtonDisabled,
    ButtonIcon,
    StatusInfo,
    StatusSuccess,
    StatusError,
    StatusIcon,
}

impl Presentation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Presentation::Classes => "classes",
            Presentation::Inline => "inline",
        }
    }

    /// Parse a configuration value, `None` for unknown names
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "classes" | "class" => Some(Presentation::Classes),
            "inline" | "inline-styles" => Some(Presentation::Inline),
            _ => None,
        }
    }

    /// Value for the `class` attribute of `slot`
    pub fn class(&self, slot: Slot) -> &'static str {
        match self {
            Presentation::Classes => utility_classes(slot),
            Presentation::Inline => "",
        }
    }

    /// Value for the `style` attribute of `slot`
    pub fn style(&self, slot: Slot) -> &'static str {
        match self {
            Presentation::Classes => "",
            Presentation::Inline => inline_style(slot),
        }
    }
}

fn utility_classes(slot: Slot) -> &'static str {
    match slot {
        Slot::Page => "min-h-screen bg-gray-100 flex items-center justify-center p-4",
        Slot::Card => "bg-white shadow-xl rounded-2xl p-8 max-w-lg w-full transform transition duration-500 hover:scale-105",
        Slot::Title => "text-3xl font-bold text-center text-gray-800 mb-6",
        Slot::SessionBar => "mb-6 flex justify-center",
        Slot::SignInButton => "flex items-center px-6 py-3 bg-blue-600 text-white font-semibold rounded-full shadow-lg hover:bg-blue-700 transition duration-300",
        Slot::SignOutButton => "flex items-center px-6 py-3 bg-red-600 text-white font-semibold rounded-full shadow-lg hover:bg-red-700 transition duration-300",
        Slot::Section => "mt-8",
        Slot::Subtitle => "text-xl font-semibold text-gray-700 mb-4 text-center",
        Slot::Form => "space-y-4",
        Slot::Label => "block text-sm font-medium text-gray-700",
        Slot::DropZoneWrap => "flex items-center justify-center w-full",
        Slot::DropZone => "flex flex-col items-center justify-center w-full h-48 border-2 border-gray-300 border-dashed rounded-lg cursor-pointer bg-gray-50 hover:bg-gray-100 transition-colors duration-300",
        Slot::DropZoneActive => "flex flex-col items-center justify-center w-full h-48 border-2 border-blue-400 border-dashed rounded-lg cursor-pointer bg-blue-50 transition-colors duration-300",
        Slot::DropZoneBody => "flex flex-col items-center justify-center pt-5 pb-6",
        Slot::DropZoneIcon => "w-10 h-10 mb-3 text-gray-400",
        Slot::DropHint => "mb-2 text-sm text-gray-500",
        Slot::FileHint => "text-xs text-gray-400 mt-1",
        Slot::HiddenInput => "hidden",
        Slot::SubmitButton => "w-full flex items-center justify-center px-6 py-3 bg-green-600 text-white font-semibold rounded-full shadow-lg disabled:opacity-50 disabled:cursor-not-allowed hover:bg-green-700 transition duration-300",
        Slot::SubmitButtonDisabled => "w-full flex items-center justify-center px-6 py-3 bg-green-600 text-white font-semibold rounded-full shadow-lg opacity-50 cursor-not-allowed",
        Slot::ButtonIcon => "mr-2 flex items-center",
        Slot::StatusInfo => "mt-4 p-4 rounded-lg flex items-center bg-blue-100 text-blue-700",
        Slot::StatusSuccess => "mt-4 p-4 rounded-lg flex items-center bg-green-100 text-green-700",
        Slot::StatusError => "mt-4 p-4 rounded-lg flex items-center bg-red-100 text-red-700",
        Slot::StatusIcon => "mr-3 flex items-center",
    }
}

fn inline_style(slot: Slot) -> &'static str {
    match slot {
        Slot::Page => "min-height: 100vh; background-color: #f3f4f6; display: flex; align-items: center; justify-content: center; padding: 1rem;",
        Slot::Card => "background-color: #ffffff; box-shadow: 0 20px 25px -5px rgba(0,0,0,0.1), 0 10px 10px -5px rgba(0,0,0,0.04); border-radius: 1rem; padding: 2rem; max-width: 32rem; width: 100%;",
        Slot::Title => "font-size: 1.875rem; font-weight: 700; text-align: center; color: #1f2937; margin-bottom: 1.5rem;",
        Slot::SessionBar => "margin-bottom: 1.5rem; display: flex; justify-content: center;",
        Slot::SignInButton => "display: flex; align-items: center; padding: 0.75rem 1.5rem; background-color: #2563eb; color: #ffffff; font-weight: 600; border: none; border-radius: 9999px; cursor: pointer;",
        Slot::SignOutButton => "display: flex; align-items: center; padding: 0.75rem 1.5rem; background-color: #dc2626; color: #ffffff; font-weight: 600; border: none; border-radius: 9999px; cursor: pointer;",
        Slot::Section => "margin-top: 2rem;",
        Slot::Subtitle => "font-size: 1.25rem; font-weight: 600; color: #374151; margin-bottom: 1rem; text-align: center;",
        Slot::Form => "display: flex; flex-direction: column; gap: 1rem;",
        Slot::Label => "display: block; font-size: 0.875rem; font-weight: 500; color: #374151;",
        Slot::DropZoneWrap => "display: flex; align-items: center; justify-content: center; width: 100%;",
        Slot::DropZone => "display: flex; flex-direction: column; align-items: center; justify-content: center; width: 100%; height: 12rem; border: 2px dashed #d1d5db; border-radius: 0.5rem; cursor: pointer; background-color: #f9fafb;",
        Slot::DropZoneActive => "display: flex; flex-direction: column; align-items: center; justify-content: center; width: 100%; height: 12rem; border: 2px dashed #60a5fa; border-radius: 0.5rem; cursor: pointer; background-color: #eff6ff;",
        Slot::DropZoneBody => "display: flex; flex-direction: column; align-items: center; justify-content: center; padding-top: 1.25rem; padding-bottom: 1.5rem;",
        Slot::DropZoneIcon => "width: 2.5rem; height: 2.5rem; margin-bottom: 0.75rem; color: #9ca3af;",
        Slot::DropHint => "margin-bottom: 0.5rem; font-size: 0.875rem; color: #6b7280;",
        Slot::FileHint => "font-size: 0.75rem; color: #9ca3af; margin-top: 0.25rem;",
        Slot::HiddenInput => "display: none;",
        Slot::SubmitButton => "width: 100%; display: flex; align-items: center; justify-content: center; padding: 0.75rem 1.5rem; background-color: #16a34a; color: #ffffff; font-weight: 600; border: none; border-radius: 9999px; cursor: pointer;",
        Slot::SubmitButtonDisabled => "width: 100%; display: flex; align-items: center; justify-content: center; padding: 0.75rem 1.5rem; background-color: #16a34a; color: #ffffff; font-weight: 600; border: none; border-radius: 9999px; opacity: 0.5; cursor: not-allowed;",
        Slot::ButtonIcon => "margin-right: 0.5rem; display: flex; align-items: center;",
        Slot::StatusInfo => "margin-top: 1rem; padding: 1rem; border-radius: 0.5rem; display: flex; align-items: center; background-color: #dbeafe; color: #1d4ed8;",
        Slot::StatusSuccess => "margin-top: 1rem; padding: 1rem; border-radius: 0.5rem; display: flex; align-items: center; background-color: #dcfce7; color: #15803d;",
        Slot::StatusError => "margin-top: 1rem; padding: 1rem; border-radius: 0.5rem; display: flex; align-items: center; background-color: #fee2e2; color: #b91c1c;",
        Slot::StatusIcon => "margin-right: 0.75rem; display: flex; align-items: center;",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Presentation::parse("classes"), Some(Presentation::Classes));
        assert_eq!(Presentation::parse("Inline"), Some(Presentation::Inline));
        assert_eq!(Presentation::parse("tailwind"), None);
        assert_eq!(
            Presentation::parse(Presentation::Inline.as_str()),
            Some(Presentation::Inline)
        );
    }

    #[test]
    fn test_exactly_one_attribute_per_slot() {
        for p in [Presentation::Classes, Presentation::Inline] {
            for slot in [Slot::Page, Slot::Card, Slot::DropZone, Slot::StatusError] {
                assert_ne!(p.class(slot).is_empty(), p.style(slot).is_empty());
            }
        }
    }

    #[test]
    fn test_disabled_submit_looks_disabled() {
        let p = Presentation::Inline;
        assert!(p.style(Slot::SubmitButtonDisabled).contains("opacity: 0.5"));
        assert!(p.style(Slot::SubmitButtonDisabled).contains("cursor: not-allowed"));
        assert!(!p.style(Slot::SubmitButton).contains("opacity"));
        assert!(Presentation::Classes
            .class(Slot::SubmitButtonDisabled)
            .contains("opacity-50"));
    }

    #[test]
    fn test_status_slots_differ() {
        let p = Presentation::Classes;
        assert!(p.class(Slot::StatusError).contains("bg-red-100"));
        assert!(p.class(Slot::StatusSuccess).contains("bg-green-100"));
        assert_ne!(
            Presentation::Inline.style(Slot::StatusError),
            Presentation::Inline.style(Slot::StatusSuccess)
        );
    }
}
