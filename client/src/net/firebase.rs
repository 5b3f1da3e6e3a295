//! Firebase Auth binding for the browser.
//!
//! The compat SDK (`firebase-app-compat.js` + `firebase-auth-compat.js`) is
//! loaded by the page shell and exposes a global `firebase` namespace. These
//! bindings cover the four calls the gateway contract needs.

use async_trait::async_trait;
use auth::config::CONFIG_ELEMENT_ID;
use auth::{AuthError, GatewayConfig, GatewayInitError, GatewaySubscription, IdentityGateway, ProviderId, Session};
use auth::gateway::StateListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = firebase, js_name = initializeApp)]
    fn initialize_app(config: &JsValue) -> Result<JsValue, JsValue>;

    type FirebaseAuth;

    #[wasm_bindgen(catch, js_namespace = firebase, js_name = auth)]
    fn firebase_auth() -> Result<FirebaseAuth, JsValue>;

    #[wasm_bindgen(method, js_name = onAuthStateChanged)]
    fn on_auth_state_changed(this: &FirebaseAuth, observer: &Closure<dyn FnMut(JsValue)>) -> js_sys::Function;

    #[wasm_bindgen(method, js_name = signInWithPopup)]
    fn sign_in_with_popup(this: &FirebaseAuth, provider: &GoogleAuthProvider) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = signOut)]
    fn sign_out(this: &FirebaseAuth) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = ["firebase", "auth"])]
    type GoogleAuthProvider;

    #[wasm_bindgen(constructor, js_namespace = ["firebase", "auth"])]
    fn new() -> GoogleAuthProvider;
}

/// Read the gateway config the server embedded in the page shell.
pub fn read_embedded_config() -> Result<GatewayConfig, GatewayInitError> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .ok_or_else(|| GatewayInitError::Malformed(format!("#{CONFIG_ELEMENT_ID} element missing")))?;
    GatewayConfig::from_json(&raw)
}

pub struct FirebaseGateway {
    auth: FirebaseAuth,
}

impl FirebaseGateway {
    /// Initialize the Firebase app and bind its auth instance.
    pub fn initialize(config: &GatewayConfig) -> Result<Self, GatewayInitError> {
        let options = js_sys::JSON::parse(&config.to_json())
            .map_err(|e| GatewayInitError::Malformed(describe(&e)))?;
        initialize_app(&options).map_err(|e| GatewayInitError::Sdk(describe(&e)))?;
        let auth = firebase_auth().map_err(|e| GatewayInitError::Sdk(describe(&e)))?;
        tracing::info!(project_id = %config.project_id, "firebase auth initialized");
        Ok(Self { auth })
    }
}

#[async_trait(?Send)]
impl IdentityGateway for FirebaseGateway {
    fn on_state_change(&self, listener: StateListener) -> GatewaySubscription {
        let observer = Closure::<dyn FnMut(JsValue)>::new(move |user: JsValue| listener(session_from_js(&user)));
        let unsubscribe = self.auth.on_auth_state_changed(&observer);
        GatewaySubscription::new(move || {
            let _ = unsubscribe.call0(&JsValue::NULL);
            drop(observer);
        })
    }

    async fn sign_in_interactive(&self, provider: ProviderId) -> Result<Session, AuthError> {
        let provider = match provider {
            ProviderId::Google => GoogleAuthProvider::new(),
        };
        let credential = JsFuture::from(self.auth.sign_in_with_popup(&provider))
            .await
            .map_err(|e| auth_error(&e))?;
        let user = js_sys::Reflect::get(&credential, &JsValue::from_str("user")).unwrap_or(JsValue::NULL);
        session_from_js(&user).ok_or_else(|| AuthError::Provider {
            code: "auth/no-user".to_owned(),
            message: "sign-in resolved without a user".to_owned(),
        })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        JsFuture::from(self.auth.sign_out())
            .await
            .map(|_| ())
            .map_err(|e| auth_error(&e))
    }
}

fn session_from_js(user: &JsValue) -> Option<Session> {
    if user.is_null() || user.is_undefined() {
        return None;
    }
    Some(Session {
        id: js_string(user, "uid")?,
        display_name: js_string(user, "displayName"),
        email: js_string(user, "email"),
    })
}

fn js_string(obj: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key)).ok()?.as_string()
}

fn auth_error(err: &JsValue) -> AuthError {
    let code = js_string(err, "code").unwrap_or_default();
    AuthError::from_code(&code, &describe(err))
}

fn describe(err: &JsValue) -> String {
    js_string(err, "message")
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}
