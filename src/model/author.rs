use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Author {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub avatar: String,
}

impl Author {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    pub fn fake(id: i64) -> Self {
        let firstname: String = FirstName().fake();
        let lastname: String = LastName().fake();

        let avatar = format!(
            "https://avatar.iran.liara.run/username?username={}+{}",
            firstname, lastname
        );

        Self {
            id,
            firstname,
            lastname,
            avatar,
        }
    }
}
