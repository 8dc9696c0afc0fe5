// small index state machines used by the carousel and the swatch picker

// active slide of a testimonial carousel; steps wrap at both ends
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Carousel { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 1 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 1 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

// selected color of a product card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwatchPicker {
    count: usize,
    selected: usize,
}

impl SwatchPicker {
    pub fn new(count: usize) -> Self {
        SwatchPicker { count, selected: 0 }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    // returns false (and keeps the current swatch) when the index is out of range
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }

        self.selected = index;
        true
    }
}
