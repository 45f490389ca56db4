use crate::commands::helpers::{next_number, search_page};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HotelError, Result};
use crate::model::{Pet, PetForm};
use crate::paging::Pager;
use crate::query::PetQuery;
use crate::store::{position, DataStore};
use crate::validation::{parse_age, validate_pet};
use uuid::Uuid;

/// Validates `form` and returns a pet carrying its values under `id`/`number`.
fn build(id: Uuid, number: u32, form: &PetForm) -> Result<Pet> {
    validate_pet(form).into_result()?;
    let age = parse_age(&form.age)
        .ok_or_else(|| HotelError::Api(format!("Unreadable age: {}", form.age)))?;
    Ok(Pet {
        id,
        number,
        name: form.name.trim().to_string(),
        age,
        species: form.species.trim().to_string(),
        description: form.description.trim().to_string(),
        diet: form.diet.trim().to_string(),
        additional_info: form.additional_info.trim().to_string(),
    })
}

pub fn create<S: DataStore>(store: &mut S, form: &PetForm) -> Result<CmdResult> {
    let mut pets = store.pets().to_vec();
    let pet = build(Uuid::new_v4(), next_number(&pets), form)?;
    pets.push(pet.clone());
    store.save_pets(pets)?;
    tracing::info!(number = pet.number, "pet created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Pet created successfully."));
    result.affected_pets.push(pet);
    Ok(result)
}

pub fn modify<S: DataStore>(store: &mut S, id: &Uuid, form: &PetForm) -> Result<CmdResult> {
    let mut pets = store.pets().to_vec();
    let index = position(&pets, id)?;
    let pet = build(pets[index].id, pets[index].number, form)?;
    pets[index] = pet.clone();
    store.save_pets(pets)?;
    tracing::info!(number = pet.number, "pet modified");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Pet modified successfully."));
    result.affected_pets.push(pet);
    Ok(result)
}

pub fn delete<S: DataStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let mut pets = store.pets().to_vec();
    let index = position(&pets, id)?;
    let pet = pets.remove(index);
    store.save_pets(pets)?;
    tracing::info!(number = pet.number, "pet deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Pet {} was deleted successfully.",
        pet.name
    )));
    result.affected_pets.push(pet);
    Ok(result)
}

pub fn list<S: DataStore>(store: &S, query: &PetQuery, pager: &Pager) -> Result<CmdResult> {
    let (listed, page) = search_page(store.pets(), query, pager);
    let mut result = CmdResult::default().with_page(page);
    result.listed_pets = listed;
    Ok(result)
}
