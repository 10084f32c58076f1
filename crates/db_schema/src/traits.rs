use diesel::{result::Error, SqliteConnection};

pub trait Crud {
  type InsertForm;
  type UpdateForm;
  type IdType;
  fn create(conn: &mut SqliteConnection, form: &Self::InsertForm) -> Result<Self, Error>
  where
    Self: Sized;
  fn read(conn: &mut SqliteConnection, id: Self::IdType) -> Result<Self, Error>
  where
    Self: Sized;
  /// when you want to null out a column, you have to send Some(None)), since sending None means
  /// you just don't want to update that column.
  fn update(
    conn: &mut SqliteConnection,
    id: Self::IdType,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error>
  where
    Self: Sized;
}

pub trait Followable {
  type Form;
  fn follow(conn: &mut SqliteConnection, form: &Self::Form) -> Result<Self, Error>
  where
    Self: Sized;
  fn unfollow(conn: &mut SqliteConnection, form: &Self::Form) -> Result<usize, Error>
  where
    Self: Sized;
}

pub trait Joinable {
  type Form;
  fn join(conn: &mut SqliteConnection, form: &Self::Form) -> Result<Self, Error>
  where
    Self: Sized;
  fn leave(conn: &mut SqliteConnection, form: &Self::Form) -> Result<usize, Error>
  where
    Self: Sized;
}

pub trait Likeable {
  type Form;
  fn like(conn: &mut SqliteConnection, form: &Self::Form) -> Result<Self, Error>
  where
    Self: Sized;
  fn remove(conn: &mut SqliteConnection, form: &Self::Form) -> Result<usize, Error>
  where
    Self: Sized;
}

pub trait Saveable {
  type Form;
  fn save(conn: &mut SqliteConnection, form: &Self::Form) -> Result<Self, Error>
  where
    Self: Sized;
  fn unsave(conn: &mut SqliteConnection, form: &Self::Form) -> Result<usize, Error>
  where
    Self: Sized;
}

pub trait Blockable {
  type Form;
  fn block(conn: &mut SqliteConnection, form: &Self::Form) -> Result<Self, Error>
  where
    Self: Sized;
  fn unblock(conn: &mut SqliteConnection, form: &Self::Form) -> Result<usize, Error>
  where
    Self: Sized;
}

pub trait Subscribable {
  type Form;
  fn subscribe(conn: &mut SqliteConnection, form: &Self::Form) -> Result<Self, Error>
  where
    Self: Sized;
  fn unsubscribe(conn: &mut SqliteConnection, form: &Self::Form) -> Result<usize, Error>
  where
    Self: Sized;
}
