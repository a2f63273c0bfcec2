use rand::{Rng, RngCore};

use crate::result::DbResult;

/// Length of the generated hex token: 4 random bytes rendered as 8 hex
/// characters with the first one dropped.
pub const TOKEN_LEN: usize = 7;

/// A single synthetic row destined for the `dados` table.
///
/// The four string fields always carry the same token within one record;
/// the upstream system fills them identically and that behavior is kept.
#[derive(Debug, Clone)]
pub struct Record {
    /// Random value in `[1, 999]`. No uniqueness is enforced here; collisions
    /// are left to the table schema, if it cares.
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub address: String,
    pub city: String,
    /// Host name of the machine performing the insert.
    pub host: String,
}

impl Record {
    /// Generates a fresh record: random id, one shared token for the four
    /// string fields, and the local host name.
    ///
    /// # Errors
    ///
    /// Returns an error if the operating system cannot report a host name.
    pub fn generate() -> DbResult<Self> {
        let mut rng = rand::rng();
        let id = rng.random_range(1..=999);
        let token = random_token(&mut rng);
        let host = hostname::get()?.to_string_lossy().into_owned();

        Ok(Self {
            id,
            name: token.clone(),
            surname: token.clone(),
            address: token.clone(),
            city: token,
            host,
        })
    }
}

/// Draws 4 bytes from the thread CSPRNG and renders them as an uppercase hex
/// token with the leading character dropped.
fn random_token(rng: &mut impl RngCore) -> String {
    let mut bytes = [0u8; 4];
    rng.fill_bytes(&mut bytes);

    let mut token = hex::encode_upper(bytes);
    token.remove(0);
    token
}
