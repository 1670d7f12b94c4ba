use crate::command::{Font, LineMode, MoveDirection, State};

// offset of the second line in DDRAM, in two line mode
const SECOND_LINE_OFFSET: u8 = 0x40;

/// What the driver believes the LCD looks like.
///
/// Nothing here is ever read back from hardware, it's bookkeeping only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LcdState {
    columns: u8,
    line: LineMode,
    font: Font,
    display_on: State,
    cursor_on: State,
    cursor_blink: State,
    // (column, row)
    cursor_pos: (u8, u8),
    wrap_addressing: State,
}

impl Default for LcdState {
    fn default() -> Self {
        Self {
            columns: 16,
            line: LineMode::default(),
            font: Font::default(),
            display_on: State::On,
            cursor_on: State::On,
            cursor_blink: State::On,
            cursor_pos: (0, 0),
            wrap_addressing: State::Off,
        }
    }
}

impl LcdState {
    pub(crate) fn get_line_capacity(&self) -> u8 {
        self.columns
    }

    pub(crate) fn set_line_capacity(&mut self, columns: u8) {
        self.columns = columns;
    }

    /// How many cells one DDRAM line has, visible or not
    pub(crate) fn get_ddram_line_capacity(&self) -> u8 {
        match self.get_line_mode() {
            LineMode::OneLine => 80,
            LineMode::TwoLine => 40,
        }
    }

    pub(crate) fn get_rows(&self) -> u8 {
        match self.get_line_mode() {
            LineMode::OneLine => 1,
            LineMode::TwoLine => 2,
        }
    }

    pub(crate) fn get_line_mode(&self) -> LineMode {
        self.line
    }

    pub(crate) fn set_line_mode(&mut self, line: LineMode) {
        self.line = line;
    }

    pub(crate) fn get_font(&self) -> Font {
        self.font
    }

    pub(crate) fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    /// A 5x11 font only exists in one line mode, and the visible width must fit in DDRAM
    pub(crate) fn is_valid(&self) -> bool {
        let font_fits = !(self.font == Font::Font5x11 && self.line == LineMode::TwoLine);
        let width_fits = (1..=self.get_ddram_line_capacity()).contains(&self.columns);

        font_fits && width_fits
    }

    pub(crate) fn get_display_state(&self) -> State {
        self.display_on
    }

    pub(crate) fn set_display_state(&mut self, display: State) {
        self.display_on = display;
    }

    pub(crate) fn get_cursor_state(&self) -> State {
        self.cursor_on
    }

    pub(crate) fn set_cursor_state(&mut self, cursor: State) {
        self.cursor_on = cursor;
    }

    pub(crate) fn get_cursor_blink(&self) -> State {
        self.cursor_blink
    }

    pub(crate) fn set_cursor_blink(&mut self, blink: State) {
        self.cursor_blink = blink;
    }

    pub(crate) fn get_wrap_addressing(&self) -> State {
        self.wrap_addressing
    }

    pub(crate) fn set_wrap_addressing(&mut self, wrap_addressing: State) {
        self.wrap_addressing = wrap_addressing;
    }

    pub(crate) fn get_cursor_pos(&self) -> (u8, u8) {
        self.cursor_pos
    }

    pub(crate) fn set_cursor_pos(&mut self, pos: (u8, u8)) {
        debug_assert!(pos.0 < self.get_line_capacity(), "x offset too big");
        debug_assert!(pos.1 < self.get_rows(), "y offset too big");

        self.cursor_pos = pos;
    }

    /// Fold any position back onto the visible area
    pub(crate) fn wrap_pos(&self, pos: (u8, u8)) -> (u8, u8) {
        (pos.0 % self.get_line_capacity(), pos.1 % self.get_rows())
    }

    /// DDRAM address of a (wrapped) position
    pub(crate) fn ddram_addr(&self, pos: (u8, u8)) -> u8 {
        // in one line mode, pos.1 will always keep at 0
        // in two line mode, the second line start at 0x40
        match pos.1 {
            1 => pos.0 + SECOND_LINE_OFFSET,
            _ => pos.0,
        }
    }

    /// Cell after `pos`, running off the last column goes to next row,
    /// running off the last cell goes back to top left
    pub(crate) fn next_pos(&self, pos: (u8, u8)) -> (u8, u8) {
        let last_column = self.get_line_capacity() - 1;
        let last_row = self.get_rows() - 1;

        match pos {
            (x, y) if x == last_column && y == last_row => (0, 0),
            (x, y) if x == last_column => (0, y + 1),
            (x, y) => (x + 1, y),
        }
    }

    /// Mirror of [`LcdState::next_pos`]
    pub(crate) fn prev_pos(&self, pos: (u8, u8)) -> (u8, u8) {
        let last_column = self.get_line_capacity() - 1;
        let last_row = self.get_rows() - 1;

        match pos {
            (0, 0) => (last_column, last_row),
            (0, y) => (last_column, y - 1),
            (x, y) => (x - 1, y),
        }
    }

    pub(crate) fn shift_cursor(&mut self, dir: MoveDirection) {
        let cur_pos = self.get_cursor_pos();
        let new_pos = match dir {
            MoveDirection::LeftToRight => self.next_pos(cur_pos),
            MoveDirection::RightToLeft => self.prev_pos(cur_pos),
        };
        self.set_cursor_pos(new_pos);
    }
}
