//! Геометрия сообщения.
//!
//! Длина сообщения 1 902 341 = 7 x 359 x 757 (разложение на простые
//! множители). Биты раскладываются в 4-мерную сетку
//! `(картинка, группа строк, строка, столбец)` в порядке row-major:
//! быстрее всех меняется последняя ось (столбец). На этом порядке держится
//! корректность всего декодера: строки картинок лежат в потоке подряд.

/// Количество картинок в сообщении.
pub const PICTURES: usize = 7;

/// Размер средней (вырожденной) оси.
pub const ROW_GROUPS: usize = 1;

/// Строк пикселей в картинке.
pub const ROWS: usize = 757;

/// Столбцов пикселей в картинке.
pub const COLS: usize = 359;

/// Форма сетки, в которую раскладывается сообщение.
pub const MESSAGE_SHAPE: GridShape = GridShape {
    pictures: PICTURES,
    row_groups: ROW_GROUPS,
    rows: ROWS,
    cols: COLS,
};

/// Требуемое количество бит в сообщении.
pub const MESSAGE_BITS: usize = MESSAGE_SHAPE.len();

/// Координата элемента в 4-мерной сетке.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoord {
    pub picture: usize,
    pub row_group: usize,
    pub row: usize,
    pub col: usize,
}

/// Размеры 4-мерной сетки `(pictures, row_groups, rows, cols)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub pictures: usize,
    pub row_groups: usize,
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    /// Общее количество элементов.
    pub const fn len(&self) -> usize {
        self.pictures * self.row_groups * self.rows * self.cols
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Элементов в одной картинке (`rows x cols`).
    pub const fn picture_len(&self) -> usize {
        self.rows * self.cols
    }

    /// Шаги (strides) осей в плоском массиве, row-major.
    pub const fn strides(&self) -> [usize; 4] {
        [
            self.row_groups * self.rows * self.cols,
            self.rows * self.cols,
            self.cols,
            1,
        ]
    }

    /// Плоский индекс по координате. `None`, если координата вне сетки.
    pub fn flat_index(
        &self,
        coord: GridCoord,
    ) -> Option<usize> {
        if coord.picture >= self.pictures
            || coord.row_group >= self.row_groups
            || coord.row >= self.rows
            || coord.col >= self.cols
        {
            return None;
        }

        let [sp, sg, sr, sc] = self.strides();

        Some(coord.picture * sp + coord.row_group * sg + coord.row * sr + coord.col * sc)
    }

    /// Координата по плоскому индексу (обратное к [`GridShape::flat_index`]).
    ///
    /// `i -> (i / (G*R*C), (i / (R*C)) mod G, (i / C) mod R, i mod C)`
    pub fn coords(
        &self,
        index: usize,
    ) -> Option<GridCoord> {
        if index >= self.len() {
            return None;
        }

        let [sp, sg, sr, _] = self.strides();

        Some(GridCoord {
            picture: index / sp,
            row_group: (index / sg) % self.row_groups,
            row: (index / sr) % self.rows,
            col: index % self.cols,
        })
    }
}
