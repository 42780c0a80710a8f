use crate::{
    database::MongoDB,
    models::{UpdateUserRequest, User, UserProfile},
};
use bcrypt::{hash, DEFAULT_COST};
use mongodb::bson::{doc, DateTime as BsonDateTime, Document};

/// Monta o $set do update a partir dos campos presentes no request.
/// Senha nova é re-hasheada antes de ir para o banco.
fn build_update_doc(request: &UpdateUserRequest) -> Result<Document, String> {
    let mut set = Document::new();

    if let Some(username) = &request.username {
        set.insert("username", username);
    }
    if let Some(email) = &request.email {
        set.insert("email", email);
    }
    if let Some(password) = &request.password {
        let hashed = hash(password, DEFAULT_COST)
            .map_err(|e| format!("Failed to hash password: {}", e))?;
        set.insert("password", hashed);
    }
    if let Some(first_name) = &request.first_name {
        set.insert("first_name", first_name);
    }
    if let Some(last_name) = &request.last_name {
        set.insert("last_name", last_name);
    }

    set.insert("updated_at", BsonDateTime::now());

    Ok(set)
}

// Partial update of the authenticated user
pub async fn update_user(
    db: &MongoDB,
    user_id: &str,
    request: &UpdateUserRequest,
) -> Result<UserProfile, String> {
    let collection = db.collection::<User>("users");

    // Request vazio: nada a escrever, devolve o perfil atual
    if request.is_noop() {
        return crate::services::auth_service::get_profile(db, user_id).await;
    }

    let set = build_update_doc(request)?;

    let result = collection
        .update_one(doc! { "user_id": user_id }, doc! { "$set": set })
        .await
        .map_err(|e| format!("Failed to update user: {}", e))?;

    if result.matched_count == 0 {
        return Err("User not found".to_string());
    }

    let user = collection
        .find_one(doc! { "user_id": user_id })
        .await
        .map_err(|e| format!("Database error: {}", e))?
        .ok_or_else(|| "User not found".to_string())?;

    log::info!("✅ User profile updated: {}", user.username);

    Ok(UserProfile::from(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_update_doc_only_sets_provided_fields() {
        let request = UpdateUserRequest {
            username: None,
            email: Some("novo@example.com".to_string()),
            password: None,
            first_name: Some("Ana".to_string()),
            last_name: None,
        };

        let set = build_update_doc(&request).unwrap();

        assert_eq!(set.get_str("email").unwrap(), "novo@example.com");
        assert_eq!(set.get_str("first_name").unwrap(), "Ana");
        assert!(!set.contains_key("username"));
        assert!(!set.contains_key("password"));
        assert!(!set.contains_key("last_name"));
        assert!(set.contains_key("updated_at"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_build_update_doc_hashes_password() {
        let request = UpdateUserRequest {
            username: None,
            email: None,
            password: Some("nova-senha".to_string()),
            first_name: None,
            last_name: None,
        };

        let set = build_update_doc(&request).unwrap();
        let stored = set.get_str("password").unwrap();

        assert_ne!(stored, "nova-senha");
        assert!(bcrypt::verify("nova-senha", stored).unwrap());
    }

    #[test]
    fn test_is_noop_detects_empty_request() {
        let empty = UpdateUserRequest {
            username: None,
            email: None,
            password: None,
            first_name: None,
            last_name: None,
        };
        assert!(empty.is_noop());

        let with_field = UpdateUserRequest {
            username: Some("joao".to_string()),
            email: None,
            password: None,
            first_name: None,
            last_name: None,
        };
        assert!(!with_field.is_noop());
    }
}
