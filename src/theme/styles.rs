//! Global CSS styles for the Northlight site.
//!
//! Quiet gallery aesthetic: warm paper background, ink text, one accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --paper: #f7f4ef;
  --paper-raised: #ffffff;
  --paper-border: #e4ded4;

  /* INK (Text) */
  --ink: #1d1b18;
  --ink-secondary: rgba(29, 27, 24, 0.72);
  --ink-muted: rgba(29, 27, 24, 0.5);

  /* ACCENT (Links, calls to action) */
  --accent: #b5542c;
  --accent-dark: #8f3f1e;
  --accent-soft: rgba(181, 84, 44, 0.12);

  /* SEMANTIC */
  --featured: #c9a227;
  --sponsored: #5c6f7b;

  /* Typography */
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

img {
  display: block;
  max-width: 100%;
}

a {
  color: var(--accent);
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 600;
  letter-spacing: -0.01em;
}

.page-lede {
  color: var(--ink-secondary);
  font-size: var(--text-lg);
  max-width: 42rem;
  margin-top: 0.5rem;
}

.section-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  margin: 3rem 0 1.25rem;
}

/* === Navigation Header === */
.nav-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 2rem;
  padding: 1.5rem 3rem;
  border-bottom: 1px solid var(--paper-border);
  background: var(--paper-raised);
}

.nav-header__title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--ink);
  text-decoration: none;
}

.nav-header__tagline {
  color: var(--ink-muted);
  font-size: var(--text-sm);
}

.nav-header__links {
  display: flex;
  gap: 1.5rem;
}

.nav-link {
  color: var(--ink-secondary);
  text-decoration: none;
  font-size: var(--text-sm);
  text-transform: uppercase;
  letter-spacing: 0.08em;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--accent);
}

/* === Page Layout === */
.page {
  max-width: 1200px;
  margin: 0 auto;
  padding: 3rem;
}

.page-intro {
  margin-bottom: 2.5rem;
}

.site-footer {
  text-align: center;
  color: var(--ink-muted);
  font-size: var(--text-sm);
  padding: 2rem;
  border-top: 1px solid var(--paper-border);
}

/* === Gallery === */
.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 2rem;
}

.gallery-card {
  background: var(--paper-raised);
  border: 1px solid var(--paper-border);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.gallery-card:hover {
  transform: translateY(-3px);
  box-shadow: 0 12px 30px rgba(0, 0, 0, 0.08);
}

.gallery-card--featured {
  grid-column: span 2;
}

.gallery-card__frame {
  position: relative;
}

.gallery-card__img {
  width: 100%;
  aspect-ratio: 3 / 2;
  object-fit: cover;
}

.gallery-card__featured {
  position: absolute;
  top: 1rem;
  left: 1rem;
  background: var(--featured);
  color: var(--paper-raised);
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.1em;
  padding: 0.25rem 0.6rem;
}

.gallery-card__content {
  padding: 1.25rem 1.5rem 1.5rem;
}

.gallery-card__category {
  color: var(--accent);
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

.gallery-card__title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  margin: 0.25rem 0;
}

.gallery-card__location,
.gallery-card__description {
  color: var(--ink-secondary);
  font-size: var(--text-sm);
}

.gallery-card__tags {
  list-style: none;
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  margin: 0.75rem 0;
}

.gallery-card__tag {
  background: var(--accent-soft);
  font-size: var(--text-xs);
  padding: 0.1rem 0.5rem;
}

.gallery-card__price {
  font-weight: 600;
}

.price-tag {
  font-variant-numeric: tabular-nums;
  white-space: nowrap;
}

/* === Licensing === */
.license-tiers {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.license-card {
  background: var(--paper-raised);
  border: 1px solid var(--paper-border);
  padding: 1.75rem;
}

.license-card--exclusive {
  border-color: var(--featured);
}

.license-card__name {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
}

.license-card__description {
  color: var(--ink-secondary);
  margin: 0.5rem 0 1rem;
}

.license-card__features {
  padding-left: 1.1rem;
  font-size: var(--text-sm);
}

.license-table {
  width: 100%;
  border-collapse: collapse;
  background: var(--paper-raised);
}

.license-table th,
.license-table td {
  text-align: left;
  padding: 0.75rem 1rem;
  border-bottom: 1px solid var(--paper-border);
}

.license-table__tier {
  text-transform: capitalize;
}

.license-table__price {
  font-variant-numeric: tabular-nums;
}

/* === Affiliate Blocks === */
.product-promo {
  display: grid;
  grid-template-columns: 240px 1fr;
  gap: 1.5rem;
  background: var(--paper-raised);
  border: 1px solid var(--paper-border);
  padding: 1.5rem;
  margin-bottom: 2rem;
  position: relative;
}

.product-promo__badge {
  position: absolute;
  top: -0.75rem;
  left: 1.5rem;
  background: var(--accent);
  color: var(--paper-raised);
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.08em;
  padding: 0.2rem 0.7rem;
}

.product-promo__image {
  width: 100%;
  object-fit: contain;
}

.product-promo__title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
}

.product-promo__description {
  color: var(--ink-secondary);
  margin: 0.5rem 0;
}

.product-promo__features {
  padding-left: 1.1rem;
  font-size: var(--text-sm);
  margin-bottom: 1rem;
}

.product-promo__footer {
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.product-promo__price {
  font-size: var(--text-xl);
  font-weight: 700;
}

.product-promo__cta {
  background: var(--accent);
  color: var(--paper-raised);
  text-decoration: none;
  padding: 0.6rem 1.4rem;
  transition: background var(--transition-fast);
}

.product-promo__cta:hover {
  background: var(--accent-dark);
}

.affiliate-disclosure {
  color: var(--sponsored);
  font-size: var(--text-xs);
  font-style: italic;
  margin-top: 1rem;
}

.deals-compact__grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1.25rem;
  margin-top: 1rem;
}

.compact-promo {
  display: block;
  background: var(--paper-raised);
  border: 1px solid var(--paper-border);
  color: var(--ink);
  text-decoration: none;
  transition: border-color var(--transition-fast);
}

.compact-promo:hover {
  border-color: var(--accent);
}

.compact-promo__image {
  width: 100%;
  aspect-ratio: 1 / 1;
  object-fit: contain;
  background: var(--paper);
}

.compact-promo__body {
  padding: 1rem;
}

.compact-promo__title {
  font-size: var(--text-base);
}

.compact-promo__price {
  display: block;
  font-weight: 700;
}

.compact-promo__cta {
  color: var(--accent);
  font-size: var(--text-sm);
}

/* === Responsive === */
@media (max-width: 900px) {
  .license-tiers {
    grid-template-columns: 1fr;
  }

  .product-promo {
    grid-template-columns: 1fr;
  }

  .gallery-card--featured {
    grid-column: span 1;
  }
}

@media (max-width: 700px) {
  .nav-header {
    flex-direction: column;
    align-items: flex-start;
    padding: 1rem 1.5rem;
  }

  .page {
    padding: 1.5rem;
  }
}
"#;
