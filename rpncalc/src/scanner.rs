// Cursor over the characters of an expression. `pos` starts before the
// first char so the first call to next() lands on it.
pub struct Scanner {
    buf: Vec<char>,
    pos: isize,
}

impl Iterator for Scanner {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        let blen = self.buf.len() as isize;
        if self.pos < blen {
            self.pos += 1;
        }
        self.curr()
    }
}

impl Scanner {
    pub fn new(source: &str) -> Scanner {
        Scanner {
            buf: source.chars().collect(),
            pos: -1,
        }
    }

    pub fn curr(&self) -> Option<char> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).copied()
    }

    // If `word` is spelled starting at the current char, advance onto its
    // last char and return true. Otherwise the scanner doesn't move.
    pub fn accept_word(&mut self, word: &str) -> bool {
        if self.pos < 0 {
            return false;
        }
        let start = self.pos as usize;
        let mut end = start;
        for expected in word.chars() {
            match self.buf.get(end) {
                Some(&c) if c == expected => end += 1,
                _ => return false,
            }
        }
        if end == start {
            return false;
        }
        self.pos = (end - 1) as isize;
        true
    }

    // Try each of `words` in order, first one spelled at the current char wins
    pub fn accept_any_word<'w>(&mut self, words: &'w [String]) -> Option<&'w str> {
        words
            .iter()
            .find(|w| self.accept_word(w))
            .map(|w| w.as_str())
    }
}
