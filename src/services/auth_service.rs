use crate::{
    database::MongoDB,
    models::{User, UserProfile},
};
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};
use bcrypt::{hash, verify, DEFAULT_COST};
use jsonwebtoken::{encode, decode, Header, Validation, EncodingKey, DecodingKey, Algorithm};
use chrono::{Utc, Duration};
use uuid::Uuid;

// JWT Claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,           // user_id
    pub username: String,
    pub iat: usize,            // issued at
    pub exp: usize,            // expiration
    pub jti: String,           // JWT ID
}

// Request/Response structures
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
}

fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "default-secret-change-me".to_string())
}

/// Tokens valem por 1 dia; o app refaz o login depois disso.
const TOKEN_TTL_DAYS: i64 = 1;

// Generate JWT token
pub fn generate_jwt(user: &User) -> Result<String, String> {
    let now = Utc::now();
    let iat = now.timestamp() as usize;
    let exp = (now + Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize;
    let jti = Uuid::new_v4().to_string();

    let claims = Claims {
        sub: user.user_id.clone(),  // Use user_id instead of _id
        username: user.username.clone(),
        iat,
        exp,
        jti,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(get_jwt_secret().as_ref())
    ).map_err(|e| format!("Failed to generate token: {}", e))
}

// Verify JWT token
pub fn verify_token(token: &str) -> Result<Claims, String> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(get_jwt_secret().as_ref()),
        &validation
    )
    .map(|data| data.claims)
    .map_err(|e| format!("Invalid token: {}", e))
}

// User login
pub async fn login(
    db: &MongoDB,
    request: &LoginRequest,
) -> Result<LoginResponse, String> {
    let collection = db.collection::<User>("users");

    let filter = doc! {
        "username": &request.username,
    };

    let user = collection
        .find_one(filter)
        .await
        .map_err(|e| format!("Database error: {}", e))?
        .ok_or_else(|| "Invalid credentials".to_string())?;

    // Verify password
    let valid = verify(&request.password, &user.password)
        .map_err(|e| format!("Password verification error: {}", e))?;

    if !valid {
        return Err("Invalid credentials".to_string());
    }

    let update = doc! {
        "$set": {
            "last_login": BsonDateTime::now(),
        }
    };

    collection
        .update_one(doc! { "user_id": &user.user_id }, update)
        .await
        .map_err(|e| format!("Failed to update last login: {}", e))?;

    let access_token = generate_jwt(&user)?;

    Ok(LoginResponse { access_token })
}

// User registration
pub async fn register(
    db: &MongoDB,
    request: &RegisterRequest,
) -> Result<LoginResponse, String> {
    let collection = db.collection::<User>("users");

    // Check if user already exists (por username ou email)
    let filter = doc! {
        "$or": [
            { "username": &request.username },
            { "email": &request.email }
        ]
    };

    if collection.find_one(filter).await.map_err(|e| format!("Database error: {}", e))?.is_some() {
        return Err("User already exists".to_string());
    }

    let hashed_password = hash(&request.password, DEFAULT_COST)
        .map_err(|e| format!("Failed to hash password: {}", e))?;

    // Generate user_id
    let new_user_id = ObjectId::new().to_hex();

    let new_user = User {
        id: None,
        user_id: new_user_id,
        username: request.username.clone(),
        email: request.email.clone(),
        password: hashed_password,
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        created_at: Some(BsonDateTime::now()),
        updated_at: Some(BsonDateTime::now()),
        last_login: Some(BsonDateTime::now()),
    };

    collection
        .insert_one(&new_user)
        .await
        .map_err(|e| format!("Failed to create user: {}", e))?;

    let access_token = generate_jwt(&new_user)?;

    log::info!("✅ User registered successfully: {}", new_user.username);

    Ok(LoginResponse { access_token })
}

// Get current user profile
pub async fn get_profile(
    db: &MongoDB,
    user_id: &str,
) -> Result<UserProfile, String> {
    let collection = db.collection::<User>("users");

    let filter = doc! {
        "user_id": user_id,
    };

    let user = collection
        .find_one(filter)
        .await
        .map_err(|e| format!("Database error: {}", e))?
        .ok_or_else(|| "User not found".to_string())?;

    Ok(UserProfile::from(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: None,
            user_id: "65f0a1b2c3d4e5f6a7b8c9d0".to_string(),
            username: "maria".to_string(),
            email: "maria@example.com".to_string(),
            password: "not-a-real-hash".to_string(),
            first_name: Some("Maria".to_string()),
            last_name: None,
            created_at: None,
            updated_at: None,
            last_login: None,
        }
    }

    #[test]
    fn test_generate_and_verify_jwt() {
        let user = sample_user();
        let token = generate_jwt(&user).unwrap();

        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, user.user_id);
        assert_eq!(claims.username, user.username);
        assert_eq!(claims.exp - claims.iat, 86_400);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let user = sample_user();
        let token = generate_jwt(&user).unwrap();

        // Flip the signature segment
        let mut parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);
        parts[2] = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
        let forged = parts.join(".");

        assert!(verify_token(&forged).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let iat = (Utc::now() - Duration::days(2)).timestamp() as usize;
        let claims = Claims {
            sub: "65f0a1b2c3d4e5f6a7b8c9d0".to_string(),
            username: "maria".to_string(),
            iat,
            exp: iat + 60,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(get_jwt_secret().as_ref()),
        )
        .unwrap();

        assert!(verify_token(&token).is_err());
    }

    #[test]
    fn test_password_hash_roundtrip() {
        // Custo baixo só para o teste não demorar
        let hashed = hash("hunter2", 4).unwrap();
        assert!(verify("hunter2", &hashed).unwrap());
        assert!(!verify("hunter3", &hashed).unwrap());
    }
}
