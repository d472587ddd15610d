use leptos::prelude::*;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1654277041050-d8f56bf61b62?crop=entropy&cs=srgb&fm=jpg&q=85";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div
            class="hero py-20 bg-gradient-to-r from-blue-600 to-indigo-700"
            style=format!("background-image: url({}); background-blend-mode: overlay;", HERO_IMAGE)
        >
            <div class="hero-content text-center text-white">
                <div class="max-w-3xl">
                    <h2 class="text-4xl md:text-6xl font-bold mb-6">"Premium Digital Subscriptions"</h2>
                    <p class="text-xl md:text-2xl text-blue-100 mb-8">
                        "Access the best digital tools and services at competitive prices. "
                        "Get verified subscriptions for CapCut, Canva, ChatGPT, and Adobe Creative Cloud."
                    </p>
                    <div class="flex justify-center gap-4">
                        <a href="#plans" class="btn bg-white text-primary border-none">"View Plans"</a>
                        <a href="#plans" class="btn btn-outline text-white">"Learn More"</a>
                    </div>
                </div>
            </div>
        </div>
    }
}
