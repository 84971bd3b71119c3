//! Shared Tailwind class constants for the directory tables and forms.

pub struct Theme;

impl Theme {
    /// Table header cell.
    pub const TH: &'static str = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";

    /// Regular table body cell.
    pub const TD: &'static str = "px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400";

    /// Text input used by the search box and the add-user form.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";

    /// Inline validation message under a form field.
    pub const FIELD_ERROR: &'static str = "mt-1 text-xs text-red-600 dark:text-red-400";

    /// Link-styled button.
    pub const LINK: &'static str = "text-blue-600 hover:text-blue-800 dark:text-blue-400 dark:hover:text-blue-300";

    /// Label/value row in the detail card.
    pub const DETAIL_LABEL: &'static str = "block text-sm font-medium text-gray-500 dark:text-gray-200";
    pub const DETAIL_VALUE: &'static str = "text-gray-900 dark:text-white";
}
