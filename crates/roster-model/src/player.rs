/// A validated player ready for insertion into the store.
///
/// `phone_number` and `date_of_birth` are carried as the validated source
/// text; the store keeps them as nullable columns without further coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub rating: Option<i64>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<String>,
}
