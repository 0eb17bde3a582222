//! Keypad table shared by every front end
//!
//! One static table maps button identifiers to actions, so a single generic
//! handler serves every button. Identifiers match the element ids of the
//! browser page.
//!
//! Layout (8 columns):
//! ```text
//! [MC ] [MR ] [M+ ] [M- ] [MS ] [mod] [AC ] [DEL]
//! [sin] [cos] [tan] [asin][acos][atan][ π ] [ e ]
//! [sinh][cosh][tanh][asinh][acosh][atanh][x!][|x|]
//! [x^2] [x^3] [x^y] [x^1/y][sqrt][cbrt][10^x][e^x]
//! [log] [log2][ln ] [logy][EXP] [1/x] [ ( ] [ ) ]
//! [ 7 ] [ 8 ] [ 9 ] [ / ] [ % ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ 0 ] [ . ] [ = ] [ + ]
//! ```

/// Memory register keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryAction {
    /// MS
    Store,
    /// M+
    Add,
    /// M-
    Subtract,
    /// MR
    Recall,
    /// MC
    Clear,
}

/// What a button does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadAction {
    /// Append a token to the expression
    Insert(&'static str),
    /// Append `leading` to an empty expression, `joined` otherwise
    InsertJoined {
        /// Token used when the expression is empty
        leading: &'static str,
        /// Token used after existing input
        joined: &'static str,
    },
    /// Evaluate the expression
    Evaluate,
    /// Delete the last character and re-evaluate
    DeleteLast,
    /// Clear expression and result
    ClearAll,
    /// Memory register operation
    Memory(MemoryAction),
    /// Show the help panel
    OpenHelp,
    /// Close the calculator (back restores it)
    OpenCut,
    /// Return to the calculator
    Back,
    /// Toggle normal/minimized size
    ToggleSize,
}

impl KeypadAction {
    /// Returns the token to append, if this action appends one
    #[must_use]
    pub const fn token(&self, expression_empty: bool) -> Option<&'static str> {
        match self {
            Self::Insert(token) => Some(*token),
            Self::InsertJoined { leading, joined } => {
                if expression_empty {
                    Some(*leading)
                } else {
                    Some(*joined)
                }
            }
            _ => None,
        }
    }

    /// Returns true for actions that change the panel or size
    #[must_use]
    pub const fn is_view_action(&self) -> bool {
        matches!(
            self,
            Self::OpenHelp | Self::OpenCut | Self::Back | Self::ToggleSize
        )
    }
}

/// A single button definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// Element id
    pub id: &'static str,
    /// Text shown on the button
    pub label: &'static str,
    /// Action performed on activation
    pub action: KeypadAction,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

const fn button(
    id: &'static str,
    label: &'static str,
    action: KeypadAction,
    row: usize,
    col: usize,
) -> KeypadButtonDef {
    KeypadButtonDef {
        id,
        label,
        action,
        row,
        col,
    }
}

const fn insert(token: &'static str) -> KeypadAction {
    KeypadAction::Insert(token)
}

const fn memory(action: MemoryAction) -> KeypadAction {
    KeypadAction::Memory(action)
}

/// Number of keypad grid rows
pub const ROWS: usize = 9;

/// Number of keypad grid columns
pub const COLS: usize = 8;

/// Keypad grid buttons in row-major order
pub const KEYPAD: &[KeypadButtonDef] = &[
    // Row 0: memory and editing
    button("MC", "MC", memory(MemoryAction::Clear), 0, 0),
    button("MR", "MR", memory(MemoryAction::Recall), 0, 1),
    button("M+", "M+", memory(MemoryAction::Add), 0, 2),
    button("M-", "M-", memory(MemoryAction::Subtract), 0, 3),
    button("MS", "MS", memory(MemoryAction::Store), 0, 4),
    button("mod", "mod", insert("mod"), 0, 5),
    button("clearComplete", "AC", KeypadAction::ClearAll, 0, 6),
    button("lastCharDelete", "DEL", KeypadAction::DeleteLast, 0, 7),
    // Row 1: trigonometry and constants
    button("sin", "sin", insert("sin("), 1, 0),
    button("cos", "cos", insert("cos("), 1, 1),
    button("tan", "tan", insert("tan("), 1, 2),
    button("sin-1", "asin", insert("asin("), 1, 3),
    button("cos-1", "acos", insert("acos("), 1, 4),
    button("tan-1", "atan", insert("atan("), 1, 5),
    button("pi", "π", insert("π"), 1, 6),
    button("EulerNumber", "e", insert("e"), 1, 7),
    // Row 2: hyperbolic
    button("sinh", "sinh", insert("sinh("), 2, 0),
    button("cosh", "cosh", insert("cosh("), 2, 1),
    button("tanh", "tanh", insert("tanh("), 2, 2),
    button("sinh-1", "asinh", insert("asinh("), 2, 3),
    button("cosh-1", "acosh", insert("acosh("), 2, 4),
    button("tanh-1", "atanh", insert("atanh("), 2, 5),
    button("fact", "x!", insert("fact("), 2, 6),
    button("abs", "|x|", insert("abs("), 2, 7),
    // Row 3: powers and roots
    button("square", "x^2", insert("^2"), 3, 0),
    button("cube", "x^3", insert("^3"), 3, 1),
    button("power", "x^y", insert("^"), 3, 2),
    button("VariablePower", "x^1/y", insert("^(1/"), 3, 3),
    button("sqrt", "sqrt", insert("sqrt("), 3, 4),
    button("cbroot", "cbrt", insert("cbrt("), 3, 5),
    button("tenPower", "10^x", insert("10^"), 3, 6),
    button("eulerPower", "e^x", insert("e^"), 3, 7),
    // Row 4: logarithms and grouping
    button("log", "log", insert("log10("), 4, 0),
    button("log2", "log2", insert("log2("), 4, 1),
    button("ln", "ln", insert("ln("), 4, 2),
    button("logy", "logy", insert("log("), 4, 3),
    button(
        "Exp",
        "EXP",
        KeypadAction::InsertJoined {
            leading: "10^",
            joined: "*10^",
        },
        4,
        4,
    ),
    button(
        "reverse",
        "1/x",
        KeypadAction::InsertJoined {
            leading: "1/",
            joined: "*1/",
        },
        4,
        5,
    ),
    button("openParenthesis", "(", insert("("), 4, 6),
    button("closeParenthesis", ")", insert(")"), 4, 7),
    // Rows 5-8: digits and arithmetic
    button("seven", "7", insert("7"), 5, 0),
    button("eight", "8", insert("8"), 5, 1),
    button("nine", "9", insert("9"), 5, 2),
    button("div", "/", insert("/"), 5, 3),
    button("rem", "%", insert("%"), 5, 4),
    button("fourth", "4", insert("4"), 6, 0),
    button("five", "5", insert("5"), 6, 1),
    button("six", "6", insert("6"), 6, 2),
    button("mul", "*", insert("*"), 6, 3),
    button("one", "1", insert("1"), 7, 0),
    button("two", "2", insert("2"), 7, 1),
    button("three", "3", insert("3"), 7, 2),
    button("sub", "-", insert("-"), 7, 3),
    button("zero", "0", insert("0"), 8, 0),
    button("decimal", ".", insert("."), 8, 1),
    button("ans", "=", KeypadAction::Evaluate, 8, 2),
    button("add", "+", insert("+"), 8, 3),
];

/// Window buttons outside the grid; `row`/`col` are unused
pub const CHROME: &[KeypadButtonDef] = &[
    button("help", "?", KeypadAction::OpenHelp, 0, 0),
    button("cut", "x", KeypadAction::OpenCut, 0, 1),
    button("minimise", "_", KeypadAction::ToggleSize, 0, 2),
    button("back", "Back", KeypadAction::Back, 0, 3),
];

/// Finds a button (grid or window) by element id
#[must_use]
pub fn find_button(id: &str) -> Option<&'static KeypadButtonDef> {
    KEYPAD.iter().chain(CHROME).find(|b| b.id == id)
}

/// Returns the grid button at `(row, col)`, if any
#[must_use]
pub fn button_at(row: usize, col: usize) -> Option<&'static KeypadButtonDef> {
    KEYPAD.iter().find(|b| b.row == row && b.col == col)
}

/// Returns every known button id
pub fn button_ids() -> impl Iterator<Item = &'static str> {
    KEYPAD.iter().chain(CHROME).map(|b| b.id)
}
