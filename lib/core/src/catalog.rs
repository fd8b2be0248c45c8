use crate::error::DataLoadError;
use crate::product::{Gender, ProductRecord};
use crate::text::Normalizer;
use ahash::{AHashMap, AHashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const COL_ID: &str = "ProductID";
pub const COL_NAME: &str = "ProductName";
pub const COL_BRAND: &str = "ProductBrand";
pub const COL_GENDER: &str = "Gender";
pub const COL_PRIMARY_COLOR: &str = "PrimaryColor";
pub const COL_DESCRIPTION: &str = "Description";

const PRICE_COLUMNS: &[&str] = &["Price", "Price (INR)"];

/// Header positions of the columns the loader reads
struct ColumnMap {
    id: usize,
    name: usize,
    brand: usize,
    gender: usize,
    primary_color: usize,
    description: usize,
    price: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, DataLoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &'static str| find(name).ok_or(DataLoadError::MissingColumn(name));

        Ok(Self {
            id: require(COL_ID)?,
            name: require(COL_NAME)?,
            brand: require(COL_BRAND)?,
            gender: require(COL_GENDER)?,
            primary_color: require(COL_PRIMARY_COLOR)?,
            description: require(COL_DESCRIPTION)?,
            price: PRICE_COLUMNS.iter().find_map(|name| find(*name)),
        })
    }
}

/// An ordered, read-only collection of products.
///
/// Built once, then shared (typically behind an `Arc`) by any number of
/// readers. Record order is the source row order.
///
/// The catalog keeps the [`Normalizer`] its token sets were derived with, so
/// queries are always normalized with the same stop words.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ProductRecord>,
    by_id: AHashMap<String, usize>,
    normalizer: Normalizer,
}

impl Catalog {
    /// Build a catalog from records, rejecting duplicate ids. Every record's
    /// tokens are re-derived with `normalizer`.
    pub fn from_records(
        mut records: Vec<ProductRecord>,
        normalizer: Normalizer,
    ) -> Result<Self, DataLoadError> {
        for record in &mut records {
            record.renormalize(&normalizer);
        }
        Self::assemble(records, normalizer)
    }

    fn assemble(records: Vec<ProductRecord>, normalizer: Normalizer) -> Result<Self, DataLoadError> {
        let mut by_id = AHashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if by_id.insert(record.id.clone(), position).is_some() {
                return Err(DataLoadError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self {
            records,
            by_id,
            normalizer,
        })
    }

    /// Load a CSV file.
    pub fn from_path(path: impl AsRef<Path>, normalizer: &Normalizer) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DataLoadError::NotFound(path.to_path_buf()),
            _ => DataLoadError::Io(e),
        })?;
        let catalog = Self::from_reader(file, normalizer)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Load CSV data from any reader. The first row must be a header.
    ///
    /// Missing colours become `"Unknown"`, unrecognised genders become
    /// `Unisex` and missing descriptions normalize to an empty token set.
    /// Only structural problems fail the load.
    pub fn from_reader<R: Read>(reader: R, normalizer: &Normalizer) -> Result<Self, DataLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnMap::from_headers(csv_reader.headers()?)?;

        let mut records = Vec::new();
        let mut coerced_genders = 0usize;
        let mut coerced_colors = 0usize;

        for (index, row) in csv_reader.records().enumerate() {
            let row = row?;
            let field = |i: usize| row.get(i);

            let id = field(columns.id).map(str::trim).unwrap_or_default();
            if id.is_empty() {
                return Err(DataLoadError::MissingId { row: index + 1 });
            }

            let raw_gender = field(columns.gender);
            let gender = Gender::coerce(raw_gender);
            if raw_gender != Some(gender.as_str()) {
                coerced_genders += 1;
            }

            let raw_color = field(columns.primary_color);
            if raw_color.map_or(true, str::is_empty) {
                coerced_colors += 1;
            }

            let price = columns
                .price
                .and_then(field)
                .and_then(|p| p.trim().parse::<f64>().ok());

            let record = ProductRecord::new(
                id,
                field(columns.name).unwrap_or_default(),
                field(columns.description),
                normalizer,
            )
            .with_brand(field(columns.brand).unwrap_or_default())
            .with_gender(gender)
            .with_primary_color(raw_color)
            .with_price(price);

            records.push(record);
        }

        tracing::debug!(
            rows = records.len(),
            coerced_genders,
            coerced_colors,
            "parsed catalog rows"
        );

        Self::assemble(records, normalizer.clone())
    }

    /// The normalizer every record's tokens were derived with
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductRecord> {
        self.records.iter()
    }

    /// Get a record by id
    pub fn get(&self, id: &str) -> Option<&ProductRecord> {
        self.position(id).map(|i| &self.records[i])
    }

    /// Catalog position of the record with this id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// First record whose name matches exactly
    pub fn find_by_name(&self, name: &str) -> Option<&ProductRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Distinct product names in first-seen order.
    pub fn product_names(&self) -> Vec<&str> {
        let mut seen = AHashSet::new();
        self.records
            .iter()
            .map(|r| r.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProductRecord;
    type IntoIter = std::slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::UNKNOWN_COLOR;
    use crate::stopwords::StopWords;

    const HEADER: &str = "ProductID,ProductName,ProductBrand,Gender,Price (INR),NumImages,Description,PrimaryColor\n";

    fn load(csv: &str) -> Result<Catalog, DataLoadError> {
        Catalog::from_reader(csv.as_bytes(), &Normalizer::english())
    }

    #[test]
    fn test_load_basic() {
        let data = format!(
            "{HEADER}10017413,DKNY Unisex Black Backpack,DKNY,Unisex,11745,7,Black backpack with a padded strap,Black\n\
             10016283,EthnoVogue Women Beige Kurta,EthnoVogue,Women,5810,7,\"Beige woven kurta, with a round neck\",Beige\n"
        );
        let catalog = load(&data).unwrap();

        assert_eq!(catalog.len(), 2);
        let first = &catalog.records()[0];
        assert_eq!(first.id, "10017413");
        assert_eq!(first.brand, "DKNY");
        assert_eq!(first.gender, Gender::Unisex);
        assert_eq!(first.primary_color, "Black");
        assert_eq!(first.price, Some(11745.0));
        assert_eq!(first.normalized_description(), "black backpack padded strap");

        let second = catalog.get("10016283").unwrap();
        assert_eq!(second.gender, Gender::Women);
        assert!(second.tokens().contains("kurta,"));
        assert_eq!(catalog.position("10016283"), Some(1));
    }

    #[test]
    fn test_coercions() {
        let data = format!(
            "{HEADER}1,A,B,Boys,100,1,red shirt,\n\
             2,C,D,,100,1,blue shirt,Blue\n\
             3,E,F,Men,abc,1,,Green\n\
             4,G,H,Girls,100,1,pink top\n\
             5,I,J,men,100,1,grey jeans,Grey\n\
             6,K,L, WOMEN ,100,1,black skirt,Black\n"
        );
        let catalog = load(&data).unwrap();

        let records = catalog.records();
        assert_eq!(records[0].gender, Gender::Unisex);
        assert_eq!(records[0].primary_color, UNKNOWN_COLOR);
        assert_eq!(records[1].gender, Gender::Unisex);
        assert_eq!(records[1].primary_color, "Blue");
        assert_eq!(records[2].gender, Gender::Men);
        assert_eq!(records[2].price, None);
        assert!(records[2].tokens().is_empty());
        // short row: colour cell absent entirely
        assert_eq!(records[3].primary_color, UNKNOWN_COLOR);
        // only the exact spellings are kept
        assert_eq!(records[4].gender, Gender::Unisex);
        assert_eq!(records[5].gender, Gender::Unisex);
    }

    #[test]
    fn test_from_records_uses_catalog_normalizer() {
        let english = Normalizer::english();
        let records = vec![ProductRecord::new("1", "Shirt", Some("the red shirt"), &english)];
        let catalog = Catalog::from_records(records, Normalizer::new(StopWords::none())).unwrap();

        let record = &catalog.records()[0];
        assert_eq!(record.normalized_description(), "the red shirt");
        assert!(record.tokens().contains("the"));
        assert!(catalog.normalizer().stop_words().is_empty());
    }

    #[test]
    fn test_from_reader_keeps_normalizer() {
        let data = format!("{HEADER}1,A,B,Men,1,1,the red shirt,Red\n");
        let normalizer = Normalizer::new(StopWords::from_words(["red"]));
        let catalog = Catalog::from_reader(data.as_bytes(), &normalizer).unwrap();

        assert_eq!(catalog.records()[0].normalized_description(), "the shirt");
        assert!(catalog.normalizer().stop_words().contains("red"));
        assert!(!catalog.normalizer().stop_words().contains("the"));
    }

    #[test]
    fn test_missing_column() {
        let data = "ProductID,ProductName,ProductBrand,Gender,Description\n1,A,B,Men,x\n";
        let err = load(data).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn(COL_PRIMARY_COLOR)));
    }

    #[test]
    fn test_headers_case_insensitive() {
        let data = "productid, productname ,PRODUCTBRAND,gender,primarycolor,description\n1,A,B,Men,Red,x\n";
        let catalog = load(data).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].primary_color, "Red");
    }

    #[test]
    fn test_duplicate_id() {
        let data = format!("{HEADER}1,A,B,Men,1,1,x,Red\n1,C,D,Women,1,1,y,Blue\n");
        let err = load(&data).unwrap_err();
        assert!(matches!(err, DataLoadError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn test_missing_id() {
        let data = format!("{HEADER}1,A,B,Men,1,1,x,Red\n ,C,D,Women,1,1,y,Blue\n");
        let err = load(&data).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingId { row: 2 }));
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::from_path("/nonexistent/products.csv", &Normalizer::english()).unwrap_err();
        assert!(matches!(err, DataLoadError::NotFound(_)));
    }

    #[test]
    fn test_empty_source() {
        let catalog = load(HEADER).unwrap();
        assert!(catalog.is_empty());
        assert!(load("").is_err());
    }

    #[test]
    fn test_product_names_distinct() {
        let data = format!(
            "{HEADER}1,Blue Shirt,B,Men,1,1,x,Red\n\
             2,Red Dress,D,Women,1,1,y,Blue\n\
             3,Blue Shirt,E,Men,1,1,z,Blue\n"
        );
        let catalog = load(&data).unwrap();
        assert_eq!(catalog.product_names(), vec!["Blue Shirt", "Red Dress"]);
        assert_eq!(catalog.find_by_name("Blue Shirt").unwrap().id, "1");
        assert!(catalog.find_by_name("Green Hat").is_none());
    }
}
