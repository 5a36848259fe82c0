use shared::Feedback;

pub const PAGE: &str = "flex min-h-screen flex-col items-center justify-between p-6 sm:p-24 bg-gray-50 dark:bg-gray-900";
pub const CARD: &str = "w-full max-w-xl bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";

pub const QUIZ_HEADER: &str = "w-full max-w-xl mb-4";
pub const QUIZ_HEADER_BORDER: &str = "h-1 w-full bg-gradient-to-r from-green-500 via-yellow-500 to-gray-300 rounded-full";
pub const QUIZ_TITLE: &str = "mt-3 text-center text-4xl font-extrabold tracking-widest text-gray-900 dark:text-white";
pub const QUESTION_HEADER: &str = "text-sm font-semibold uppercase tracking-wide text-gray-500 dark:text-gray-400 mb-2";
pub const QUESTION_TEXT: &str = "text-lg text-gray-900 dark:text-white";

pub const ATTEMPT_ROW: &str = "flex justify-center gap-1 mb-2";
pub const ATTEMPT_BLOCK: &str = "w-10 h-10 sm:w-12 sm:h-12 flex items-center justify-center rounded text-xl font-bold text-black";
pub const ANSWER_ROW: &str = "flex justify-center gap-1 my-4";
pub const ANSWER_INPUT: &str = "w-10 h-10 sm:w-12 sm:h-12 text-center text-xl font-bold uppercase rounded border-2 border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-900 text-gray-900 dark:text-white focus:border-blue-500 focus:outline-none disabled:opacity-50";
pub const ANSWER_SPACE: &str = "w-4 sm:w-6";

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-700";

pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400";
pub const TEXT_LINK: &str = "text-blue-500 hover:text-blue-400 transition-colors";

pub const TOAST: &str = "fixed bottom-6 left-1/2 -translate-x-1/2 rounded-lg bg-gray-900 text-white px-4 py-2 shadow-lg";

pub fn feedback_color(feedback: Feedback) -> &'static str {
    match feedback {
        Feedback::Correct => "bg-green-500",
        Feedback::WrongPosition => "bg-yellow-500",
        Feedback::Incorrect => "bg-gray-300",
    }
}
