// DataTable Component
// Generic tabular renderer: declarative column definitions, loading and empty
// states, stable client-side sort toggle on sortable columns. Sorting
// reorders the already-fetched rows only — no server round-trip.

use crate::components::spinner::{spinner, SpinnerSize, SpinnerVariant};
use crate::tokens::*;
use std::cmp::Ordering;
use std::rc::Rc;
use zoon::*;

/// A comparable, displayable cell projection of a row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(number) => {
                if number.fract() == 0.0 && number.abs() < 1e15 {
                    format!("{}", *number as i64)
                } else {
                    format!("{number}")
                }
            }
            CellValue::Bool(value) => value.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    fn type_rank(&self) -> u8 {
        match self {
            CellValue::Number(_) => 0,
            CellValue::Text(_) => 1,
            CellValue::Bool(_) => 2,
            CellValue::Empty => 3,
        }
    }

    /// Total order: same-type values compare naturally, mixed types by
    /// type rank, `Empty` last.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Next sort state after clicking a sortable header: a fresh column sorts
/// ascending, clicking the current column toggles direction.
pub fn next_sort(
    current: Option<(usize, SortDirection)>,
    clicked: usize,
) -> Option<(usize, SortDirection)> {
    match current {
        Some((index, direction)) if index == clicked => Some((index, direction.toggle())),
        _ => Some((clicked, SortDirection::Ascending)),
    }
}

/// Stable reorder of `rows` by a column's cell value.
pub fn sort_rows<T: Clone>(
    mut rows: Vec<T>,
    column: &TableColumn<T>,
    direction: SortDirection,
) -> Vec<T> {
    rows.sort_by(|a, b| {
        let ordering = (column.value)(a).compare(&(column.value)(b));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    rows
}

/// What the table body shows for a given (loading, row count) pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TableBodyState {
    Loading,
    Empty,
    Rows,
}

pub fn table_body_state(loading: bool, row_count: usize) -> TableBodyState {
    if loading {
        TableBodyState::Loading
    } else if row_count == 0 {
        TableBodyState::Empty
    } else {
        TableBodyState::Rows
    }
}

#[derive(Clone)]
pub struct TableColumn<T> {
    pub key: &'static str,
    pub label: String,
    pub sortable: bool,
    pub width: Option<u32>,
    value: Rc<dyn Fn(&T) -> CellValue>,
    render: Option<Rc<dyn Fn(&T) -> RawElOrText>>,
}

impl<T> TableColumn<T> {
    pub fn new(
        key: &'static str,
        label: impl Into<String>,
        value: impl Fn(&T) -> CellValue + 'static,
    ) -> Self {
        Self {
            key,
            label: label.into(),
            sortable: false,
            width: None,
            value: Rc::new(value),
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width_px: u32) -> Self {
        self.width = Some(width_px);
        self
    }

    /// Custom cell renderer; the default stringifies the cell value.
    pub fn render(mut self, render: impl Fn(&T) -> RawElOrText + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    pub fn cell_value(&self, row: &T) -> CellValue {
        (self.value)(row)
    }
}

pub struct DataTableBuilder<T: Clone + 'static> {
    columns: Vec<TableColumn<T>>,
    rows_signal: Box<dyn Signal<Item = Vec<T>> + Unpin>,
    loading_signal: Box<dyn Signal<Item = bool> + Unpin>,
    empty_message: String,
}

impl<T: Clone + 'static> DataTableBuilder<T> {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            rows_signal: Box::new(always(Vec::new())),
            loading_signal: Box::new(always(false)),
            empty_message: "Nothing here yet".to_string(),
        }
    }

    pub fn column(mut self, column: TableColumn<T>) -> Self {
        self.columns.push(column);
        self
    }

    pub fn rows_signal(mut self, rows: impl Signal<Item = Vec<T>> + Unpin + 'static) -> Self {
        self.rows_signal = Box::new(rows);
        self
    }

    pub fn loading_signal(mut self, loading: impl Signal<Item = bool> + Unpin + 'static) -> Self {
        self.loading_signal = Box::new(loading);
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn build(self) -> impl Element {
        let sort_state: Mutable<Option<(usize, SortDirection)>> = Mutable::new(None);
        let columns = Rc::new(self.columns);
        let empty_message = self.empty_message;

        let header = Self::header_row(&columns, &sort_state);

        let body = {
            let columns = columns.clone();
            let rows_signal = self.rows_signal;
            let loading_signal = self.loading_signal;
            map_ref! {
                let loading = loading_signal,
                let rows = rows_signal,
                let sort = sort_state.signal() => {
                    let view_rows = match sort {
                        Some((index, direction)) => {
                            sort_rows(rows.clone(), &columns[*index], *direction)
                        }
                        None => rows.clone(),
                    };
                    match table_body_state(*loading, view_rows.len()) {
                        TableBodyState::Loading => El::new()
                            .s(Width::fill())
                            .s(Padding::all(SPACING_32))
                            .s(Align::center())
                            .child(
                                spinner()
                                    .size(SpinnerSize::Medium)
                                    .variant(SpinnerVariant::Primary)
                                    .build(),
                            )
                            .unify(),
                        TableBodyState::Empty => El::new()
                            .s(Width::fill())
                            .s(Padding::all(SPACING_24))
                            .s(Align::center())
                            .s(Font::new()
                                .size(FONT_SIZE_14)
                                .color_signal(neutral_8()))
                            .child(Text::new(&empty_message))
                            .unify(),
                        TableBodyState::Rows => Column::new()
                            .s(Width::fill())
                            .items(view_rows.iter().map(|row| Self::data_row(&columns, row)))
                            .unify(),
                    }
                }
            }
        };

        Column::new()
            .s(Width::fill())
            .s(RoundedCorners::all(CORNER_RADIUS_8))
            .s(Borders::all_signal(
                theme().map(|t| {
                    Border::new().width(BORDER_WIDTH_1).color(match t {
                        Theme::Light => "oklch(90% 0.025 255)",
                        Theme::Dark => "oklch(30% 0.045 255)",
                    })
                }),
            ))
            .item(header)
            .item(El::new().s(Width::fill()).child_signal(body))
    }

    fn header_row(
        columns: &Rc<Vec<TableColumn<T>>>,
        sort_state: &Mutable<Option<(usize, SortDirection)>>,
    ) -> impl Element + use<T> {
        Row::new()
            .s(Width::fill())
            .s(Padding::new().x(SPACING_16).y(SPACING_12))
            .s(Gap::new().x(SPACING_16))
            .s(Background::new().color_signal(neutral_2()))
            .items(columns.iter().enumerate().map(|(index, column)| {
                let sortable = column.sortable;
                let sort_state = sort_state.clone();

                let cell = Row::new()
                    .s(Gap::new().x(SPACING_4))
                    .s(Align::new().center_y())
                    .s(Font::new()
                        .size(FONT_SIZE_12)
                        .weight(FontWeight::Number(FONT_WEIGHT_6))
                        .color_signal(neutral_9()))
                    .item(Text::new(&column.label))
                    .item(El::new().child_signal(sort_state.signal().map(move |sort| {
                        match sort {
                            Some((sorted_index, direction)) if sorted_index == index => {
                                Some(Text::new(direction.arrow()))
                            }
                            _ => None,
                        }
                    })));

                let mut wrapper = match column.width {
                    Some(width_px) => El::new().s(Width::exact(width_px)).child(cell),
                    None => El::new().s(Width::fill()).child(cell),
                };
                if sortable {
                    wrapper = wrapper.s(Cursor::new(CursorIcon::Pointer)).on_click({
                        let sort_state = sort_state.clone();
                        move || sort_state.update(|current| next_sort(current, index))
                    });
                }
                wrapper
            }))
    }

    fn data_row(columns: &Rc<Vec<TableColumn<T>>>, row: &T) -> impl Element + use<T> {
        Row::new()
            .s(Width::fill())
            .s(Padding::new().x(SPACING_16).y(SPACING_12))
            .s(Gap::new().x(SPACING_16))
            .s(Align::new().center_y())
            .update_raw_el(|raw_el| {
                raw_el.style_signal(
                    "border-top",
                    theme().map(|t| match t {
                        Theme::Light => "1px solid oklch(95% 0.025 255)",
                        Theme::Dark => "1px solid oklch(22% 0.025 255)",
                    }),
                )
            })
            .items(columns.iter().map(|column| {
                let content = match &column.render {
                    Some(render) => render(row),
                    None => El::new()
                        .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_11()))
                        .child(Text::new(column.cell_value(row).display()))
                        .unify(),
                };
                match column.width {
                    Some(width_px) => El::new().s(Width::exact(width_px)).child(content),
                    None => El::new().s(Width::fill()).child(content),
                }
            }))
    }
}

// Convenience function
pub fn data_table<T: Clone + 'static>() -> DataTableBuilder<T> {
    DataTableBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct TestRow {
        id: u64,
        name: &'static str,
    }

    fn id_column() -> TableColumn<TestRow> {
        TableColumn::new("id", "Id", |row: &TestRow| CellValue::Number(row.id as f64)).sortable()
    }

    fn rows() -> Vec<TestRow> {
        vec![
            TestRow { id: 3, name: "c" },
            TestRow { id: 1, name: "a" },
            TestRow { id: 2, name: "b" },
        ]
    }

    #[test]
    fn ascending_then_descending_toggle() {
        let column = id_column();
        let ascending = sort_rows(rows(), &column, SortDirection::Ascending);
        assert_eq!(ascending.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        let descending = sort_rows(ascending, &column, SortDirection::Descending);
        assert_eq!(descending.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let column = TableColumn::new("same", "Same", |_: &TestRow| CellValue::Number(0.0));
        let sorted = sort_rows(rows(), &column, SortDirection::Ascending);
        assert_eq!(sorted, rows());
        let reversed = sort_rows(rows(), &column, SortDirection::Descending);
        assert_eq!(reversed, rows());
    }

    #[test]
    fn clicking_headers_walks_the_expected_states() {
        let first = next_sort(None, 0);
        assert_eq!(first, Some((0, SortDirection::Ascending)));
        let second = next_sort(first, 0);
        assert_eq!(second, Some((0, SortDirection::Descending)));
        let other = next_sort(second, 2);
        assert_eq!(other, Some((2, SortDirection::Ascending)));
    }

    #[test]
    fn empty_state_requires_not_loading() {
        assert_eq!(table_body_state(true, 0), TableBodyState::Loading);
        assert_eq!(table_body_state(false, 0), TableBodyState::Empty);
        assert_eq!(table_body_state(false, 2), TableBodyState::Rows);
    }

    #[test]
    fn mixed_cell_values_have_a_total_order() {
        let mut values = vec![
            CellValue::Empty,
            CellValue::Text("b".to_string()),
            CellValue::Number(10.0),
            CellValue::Bool(true),
            CellValue::Number(2.0),
        ];
        values.sort_by(|a, b| a.compare(b));
        assert_eq!(
            values,
            vec![
                CellValue::Number(2.0),
                CellValue::Number(10.0),
                CellValue::Text("b".to_string()),
                CellValue::Bool(true),
                CellValue::Empty,
            ]
        );
    }

    #[test]
    fn number_display_drops_integral_fraction() {
        assert_eq!(CellValue::Number(7.0).display(), "7");
        assert_eq!(CellValue::Number(7.25).display(), "7.25");
    }
}
