//! # Token Vector Table ``{ String -> [f32; dim] }``

use serde::{Deserialize, Serialize};

use crate::{
    errors::{WTResult, WordtableError},
    persist::JsonSnapshot,
    table::OrderedTable,
    vectors::{VectorData, io::parse_vector},
};

/// Maps tokens to fixed-width `f32` vectors, with an unknown-vector fallback.
///
/// Rows are stored contiguously in token insertion order; every row,
/// and the unk vector, has length [`VectorTable::dim`].
///
/// Lookups take `&self` and may run from many threads at once;
/// mutation requires `&mut self`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VectorTableState", into = "VectorTableState")]
pub struct VectorTable {
    table: OrderedTable,
    dim: usize,
    data: Vec<f32>,
    unk_vector: Vec<f32>,
}

/// Serialized form of a [`VectorTable`].
#[derive(Serialize, Deserialize)]
struct VectorTableState {
    dim: usize,
    tokens: Vec<String>,
    data: Vec<f32>,
    unk_vector: Vec<f32>,
}

impl From<VectorTable> for VectorTableState {
    fn from(table: VectorTable) -> Self {
        Self {
            dim: table.dim,
            tokens: table.table.into_tokens(),
            data: table.data,
            unk_vector: table.unk_vector,
        }
    }
}

impl TryFrom<VectorTableState> for VectorTable {
    type Error = WordtableError;

    fn try_from(state: VectorTableState) -> WTResult<Self> {
        let expected = state.tokens.len().checked_mul(state.dim);
        if expected != Some(state.data.len()) {
            return Err(WordtableError::Configuration(format!(
                "stored data holds {} values; expected {} rows of width {}",
                state.data.len(),
                state.tokens.len(),
                state.dim
            )));
        }
        check_dim(state.dim, &state.unk_vector)?;

        Ok(Self {
            table: OrderedTable::from_unique_tokens(state.tokens)?,
            dim: state.dim,
            data: state.data,
            unk_vector: state.unk_vector,
        })
    }
}

impl JsonSnapshot for VectorTable {}

fn check_dim(
    dim: usize,
    vector: &[f32],
) -> WTResult<()> {
    if vector.len() != dim {
        return Err(WordtableError::DimensionMismatch {
            expected: dim,
            found: vector.len(),
        });
    }
    Ok(())
}

impl VectorTable {
    /// Build a table from parallel token and vector sequences.
    ///
    /// ## Arguments
    /// * `tokens` - The tokens; must be unique.
    /// * `vectors` - One `f32` vector per token, all of the same length.
    /// * `unk_vector` - The fallback vector; defaults to zeros of the vectors' width.
    ///
    /// ## Returns
    /// The table, or, checked in this order:
    /// * [`WordtableError::Configuration`] if `vectors` is empty and no `unk_vector` is given,
    /// * [`WordtableError::Type`] if any vector is not `f32`,
    /// * [`WordtableError::SizeMismatch`] if the sequences differ in length,
    /// * [`WordtableError::DimensionMismatch`] if the widths differ,
    /// * [`WordtableError::DuplicateKey`] if a token repeats.
    pub fn new<S, V>(
        tokens: Vec<S>,
        vectors: Vec<V>,
        unk_vector: Option<VectorData>,
    ) -> WTResult<Self>
    where
        S: Into<String>,
        V: Into<VectorData>,
    {
        if vectors.is_empty() && unk_vector.is_none() {
            return Err(WordtableError::Configuration(
                "the vectors list is empty and a default unk vector wasn't provided".to_string(),
            ));
        }

        let rows = vectors
            .into_iter()
            .map(|v| Into::<VectorData>::into(v).try_into_f32())
            .collect::<WTResult<Vec<Vec<f32>>>>()?;
        let unk_vector = unk_vector.map(VectorData::try_into_f32).transpose()?;

        if tokens.len() != rows.len() {
            return Err(WordtableError::SizeMismatch {
                tokens: tokens.len(),
                vectors: rows.len(),
            });
        }

        Self::from_rows(tokens.into_iter().map(Into::into), rows, unk_vector)
    }

    /// Build a table from ``(token, vector)`` pairs.
    ///
    /// See [`VectorTable::new`] for the failure modes.
    pub fn from_pairs<I, S, V>(
        pairs: I,
        unk_vector: Option<VectorData>,
    ) -> WTResult<Self>
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<VectorData>,
    {
        let (tokens, vectors): (Vec<S>, Vec<V>) = pairs.into_iter().unzip();
        Self::new(tokens, vectors, unk_vector)
    }

    /// Build a table from ``(token, "num num num ...")`` records.
    ///
    /// Records are parsed in order until the iterator is exhausted.
    ///
    /// ## Returns
    /// The table, or [`WordtableError::Parse`] for a malformed number;
    /// otherwise as [`VectorTable::new`].
    pub fn from_stream<I, S, T>(
        records: I,
        unk_vector: Option<VectorData>,
    ) -> WTResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: AsRef<str>,
    {
        let mut tokens: Vec<String> = Vec::new();
        let mut rows: Vec<Vec<f32>> = Vec::new();
        for (token, values) in records {
            tokens.push(token.into());
            rows.push(parse_vector(values.as_ref())?);
        }
        let unk_vector = unk_vector.map(VectorData::try_into_f32).transpose()?;

        Self::from_rows(tokens, rows, unk_vector)
    }

    /// Validate and pack already-typed rows.
    pub(crate) fn from_rows<I>(
        tokens: I,
        rows: Vec<Vec<f32>>,
        unk_vector: Option<Vec<f32>>,
    ) -> WTResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let dim = match (rows.first(), &unk_vector) {
            (Some(row), _) => row.len(),
            (None, Some(unk)) => unk.len(),
            (None, None) => {
                return Err(WordtableError::Configuration(
                    "the vectors list is empty and a default unk vector wasn't provided"
                        .to_string(),
                ));
            }
        };

        for row in &rows {
            check_dim(dim, row)?;
        }
        let unk_vector = unk_vector.unwrap_or_else(|| vec![0.0; dim]);
        check_dim(dim, &unk_vector)?;

        let table = OrderedTable::from_unique_tokens(tokens)?;
        if table.len() != rows.len() {
            return Err(WordtableError::SizeMismatch {
                tokens: table.len(),
                vectors: rows.len(),
            });
        }

        Ok(Self {
            table,
            dim,
            data: rows.concat(),
            unk_vector,
        })
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The vector width.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The fallback vector.
    pub fn unk_vector(&self) -> &[f32] {
        &self.unk_vector
    }

    /// Does the table contain `token`?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.table.contains(token)
    }

    /// The tokens, in insertion order.
    pub fn tokens(&self) -> &[String] {
        self.table.tokens()
    }

    fn row(
        &self,
        index: usize,
    ) -> &[f32] {
        &self.data[index * self.dim..(index + 1) * self.dim]
    }

    /// The vector for `token`, or the unk vector when absent.
    pub fn get(
        &self,
        token: &str,
    ) -> &[f32] {
        self.get_vector(token).unwrap_or(&self.unk_vector)
    }

    /// The vector for `token`, without the unk fallback.
    pub fn get_vector(
        &self,
        token: &str,
    ) -> Option<&[f32]> {
        self.table.index_of(token).map(|index| self.row(index))
    }

    /// Look up each token, concatenating the vectors row-major.
    ///
    /// ## Returns
    /// A ``tokens.len() * dim`` buffer; unknown tokens get the unk vector.
    pub fn lookup_vectors<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Vec<f32> {
        let mut buf = Vec::with_capacity(tokens.len() * self.dim);
        for token in tokens {
            buf.extend_from_slice(self.get(token.as_ref()));
        }
        buf
    }

    /// Iterate over ``(token, vector)`` in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &[f32])> + '_ {
        self.table
            .iter()
            .map(move |(index, token)| (token, self.row(index)))
    }

    /// Insert or overwrite the vector for `token`.
    ///
    /// ## Returns
    /// [`WordtableError::Type`] if `vector` is not `f32`, or
    /// [`WordtableError::DimensionMismatch`] if its width differs from [`VectorTable::dim`];
    /// the table is unchanged in that case.
    pub fn set<S, V>(
        &mut self,
        token: S,
        vector: V,
    ) -> WTResult<()>
    where
        S: Into<String>,
        V: Into<VectorData>,
    {
        let vector = vector.into();
        let values = vector.try_as_f32()?;
        check_dim(self.dim, values)?;

        let (index, added) = self.table.push(token);
        if added {
            self.data.extend_from_slice(values);
        } else {
            let start = index * self.dim;
            self.data[start..start + self.dim].copy_from_slice(values);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{check_is_send, check_is_sync};

    fn ab_table() -> VectorTable {
        VectorTable::new(
            vec!["a", "b"],
            vec![vec![1.0_f32, 0.0], vec![0.0, 1.0]],
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_basic_lookup() {
        let table = ab_table();
        check_is_send(&table);
        check_is_sync(&table);

        assert_eq!(table.len(), 2);
        assert_eq!(table.dim(), 2);
        assert_eq!(table.get("a"), [1.0, 0.0]);
        assert_eq!(table.get("b"), [0.0, 1.0]);
        assert_eq!(table.get("x"), [0.0, 0.0]);
        assert_eq!(table.get_vector("x"), None);
        assert_eq!(table.tokens(), &["a", "b"]);
    }

    #[test]
    fn test_explicit_unk_vector() {
        let table = VectorTable::new(
            vec!["a"],
            vec![vec![1.0_f32, 0.0]],
            Some(vec![-1.0_f32, -1.0].into()),
        )
        .unwrap();
        assert_eq!(table.get("missing"), [-1.0, -1.0]);
        assert_eq!(table.unk_vector(), [-1.0, -1.0]);
    }

    #[test]
    fn test_empty_with_unk() {
        let table = VectorTable::new(
            Vec::<String>::new(),
            Vec::<Vec<f32>>::new(),
            Some(vec![0.0_f32].into()),
        )
        .unwrap();
        assert!(table.is_empty());
        assert_eq!(table.dim(), 1);
        assert_eq!(table.get("not_in_it"), [0.0]);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            VectorTable::new(Vec::<String>::new(), Vec::<Vec<f32>>::new(), None),
            Err(WordtableError::Configuration(_))
        ));
        assert!(matches!(
            VectorTable::new(vec!["a"], Vec::<Vec<f32>>::new(), None),
            Err(WordtableError::Configuration(_))
        ));
        assert!(matches!(
            VectorTable::new(vec!["a", "b"], vec![VectorData::I32(vec![1])], None),
            Err(WordtableError::Type { .. })
        ));

        assert!(matches!(
            VectorTable::new(
                vec!["a", "b", "c"],
                vec![vec![1.0_f32, 0.0, 0.0], vec![0.0, 1.0, 0.0]],
                None
            ),
            Err(WordtableError::SizeMismatch {
                tokens: 3,
                vectors: 2
            })
        ));

        assert!(matches!(
            VectorTable::new(
                vec!["a", "a"],
                vec![vec![1.0_f32, 0.0], vec![0.0, 1.0]],
                None
            ),
            Err(WordtableError::DuplicateKey(t)) if t == "a"
        ));

        assert!(matches!(
            VectorTable::new(
                vec!["a", "b"],
                vec![VectorData::F32(vec![1.0, 0.0]), VectorData::I64(vec![0, 1])],
                None
            ),
            Err(WordtableError::Type { .. })
        ));

        assert!(matches!(
            VectorTable::new(vec!["a"], vec![vec![1.0_f32]], Some(vec![0_i32].into())),
            Err(WordtableError::Type { .. })
        ));

        assert!(matches!(
            VectorTable::new(
                vec!["a", "b"],
                vec![vec![1.0_f32, 0.0], vec![0.0]],
                None
            ),
            Err(WordtableError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        ));

        assert!(matches!(
            VectorTable::new(
                vec!["a"],
                vec![vec![1.0_f32, 0.0]],
                Some(vec![0.0_f32].into())
            ),
            Err(WordtableError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_set() {
        let mut table = ab_table();

        table.set("c", vec![0.5_f32, 0.5]).unwrap();
        assert_eq!(table.get("c"), [0.5, 0.5]);
        assert_eq!(table.len(), 3);

        table.set("a", [2.0_f32, 3.0]).unwrap();
        assert_eq!(table.get("a"), [2.0, 3.0]);
        assert_eq!(table.get("b"), [0.0, 1.0]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_set_rejects_without_mutation() {
        let mut table = ab_table();
        let before = table.clone();

        assert!(matches!(
            table.set("a", vec![1.0_f64, 1.0]),
            Err(WordtableError::Type {
                found: crate::vectors::DType::F64,
                ..
            })
        ));
        assert!(matches!(
            table.set("z", vec![1.0_f32]),
            Err(WordtableError::DimensionMismatch { .. })
        ));
        assert_eq!(table, before);
    }

    #[test]
    fn test_from_stream() {
        let table = VectorTable::from_stream([("a", "1 0"), ("b", " 0   1 ")], None).unwrap();
        assert_eq!(table.get("b"), [0.0, 1.0]);

        assert!(matches!(
            VectorTable::from_stream([("a", "1 zero")], None),
            Err(WordtableError::Parse(_))
        ));
    }

    #[test]
    fn test_lookup_vectors_and_iter() {
        let table = ab_table();
        assert_eq!(
            table.lookup_vectors(&["b", "?", "a"]),
            vec![0.0, 1.0, 0.0, 0.0, 1.0, 0.0]
        );

        let items: Vec<(&str, &[f32])> = table.iter().collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], ("b", [0.0_f32, 1.0].as_slice()));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut table = ab_table();
        table.set("c", vec![0.25_f32, -0.5]).unwrap();

        let blob = serde_json::to_string(&table).unwrap();
        let restored: VectorTable = serde_json::from_str(&blob).unwrap();

        assert_eq!(restored, table);
        assert_eq!(restored.get("c"), [0.25, -0.5]);
        assert_eq!(restored.get("nope"), table.unk_vector());
    }

    #[test]
    fn test_deserialize_rejects_bad_state() {
        let short = r#"{"dim":2,"tokens":["a","b"],"data":[1.0,0.0,0.0],"unk_vector":[0.0,0.0]}"#;
        assert!(serde_json::from_str::<VectorTable>(short).is_err());

        let bad_unk = r#"{"dim":2,"tokens":["a"],"data":[1.0,0.0],"unk_vector":[0.0]}"#;
        assert!(serde_json::from_str::<VectorTable>(bad_unk).is_err());

        let huge_dim = r#"{"dim":18446744073709551615,"tokens":["a","b"],"data":[],"unk_vector":[]}"#;
        assert!(serde_json::from_str::<VectorTable>(huge_dim).is_err());
    }
}
