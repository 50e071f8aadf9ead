//! SAT code catalogs and the `describe` resolver.
//!
//! Every catalog is a sorted static slice of `(code, description)` pairs,
//! searched by code. Lookups are total: a code that is not in the catalog
//! simply has no description.

mod currencies;
mod units;

use currencies::CURRENCY_CODES;
use units::UNIT_CODES;

/// The SAT catalogs a CFDI printout resolves codes against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    /// `c_ClaveUnidad`
    Units,
    /// `c_Impuesto`
    Taxes,
    /// `c_FormaPago`
    PaymentForms,
    /// `c_MetodoPago`
    PaymentMethods,
    /// `c_Moneda`
    Currencies,
    /// `c_RegimenFiscal`
    TaxRegimes,
    /// `c_TipoDeComprobante`
    ReceiptTypes,
    /// `c_TipoRelacion`
    RelationTypes,
    /// `c_UsoCFDI`
    CfdiUses,
}

impl Catalog {
    /// Every catalog, in declaration order.
    pub const ALL: [Catalog; 9] = [
        Self::Units,
        Self::Taxes,
        Self::PaymentForms,
        Self::PaymentMethods,
        Self::Currencies,
        Self::TaxRegimes,
        Self::ReceiptTypes,
        Self::RelationTypes,
        Self::CfdiUses,
    ];

    /// SAT name of the catalog (e.g. "c_FormaPago").
    pub fn sat_name(&self) -> &'static str {
        match self {
            Self::Units => "c_ClaveUnidad",
            Self::Taxes => "c_Impuesto",
            Self::PaymentForms => "c_FormaPago",
            Self::PaymentMethods => "c_MetodoPago",
            Self::Currencies => "c_Moneda",
            Self::TaxRegimes => "c_RegimenFiscal",
            Self::ReceiptTypes => "c_TipoDeComprobante",
            Self::RelationTypes => "c_TipoRelacion",
            Self::CfdiUses => "c_UsoCFDI",
        }
    }

    pub(crate) fn entries(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Units => UNIT_CODES,
            Self::Taxes => TAX_CODES,
            Self::PaymentForms => PAYMENT_FORMS,
            Self::PaymentMethods => PAYMENT_METHODS,
            Self::Currencies => CURRENCY_CODES,
            Self::TaxRegimes => TAX_REGIMES,
            Self::ReceiptTypes => RECEIPT_TYPES,
            Self::RelationTypes => RELATION_TYPES,
            Self::CfdiUses => CFDI_USES,
        }
    }

    /// Raw description for `code`, if the catalog knows it.
    pub fn lookup(&self, code: &str) -> Option<&'static str> {
        search(self.entries(), code)
    }

    /// `"<code> - <description>"`, or an empty string for unknown codes.
    pub fn describe(&self, code: &str) -> String {
        match self.lookup(code) {
            Some(description) => format!("{code} - {description}"),
            None => String::new(),
        }
    }
}

/// Resolve `code` against `catalog` for display.
///
/// Returns `"<code> - <description>"` when the code is known and an empty
/// string otherwise. Never fails.
pub fn describe(catalog: Catalog, code: &str) -> String {
    catalog.describe(code)
}

fn search(
    entries: &'static [(&'static str, &'static str)],
    code: &str,
) -> Option<&'static str> {
    entries
        .binary_search_by(|(candidate, _)| (*candidate).cmp(code))
        .ok()
        .map(|idx| entries[idx].1)
}

static TAX_CODES: &[(&str, &str)] = &[
    ("001", "ISR"),
    ("002", "IVA"),
    ("003", "IEPS"),
];

static PAYMENT_FORMS: &[(&str, &str)] = &[
    ("01", "Efectivo"),
    ("02", "Cheque nominativo"),
    ("03", "Transferencia electrónica de fondos"),
    ("04", "Tarjeta de crédito"),
    ("05", "Monedero electrónico"),
    ("06", "Dinero electrónico"),
    ("08", "Vales de despensa"),
    ("12", "Dación en pago"),
    ("13", "Pago por subrogación"),
    ("14", "Pago por consignación"),
    ("15", "Condonación"),
    ("17", "Compensación"),
    ("23", "Novación"),
    ("24", "Confusión"),
    ("25", "Remisión de deuda"),
    ("26", "Prescripción o caducidad"),
    ("27", "A satisfacción del acreedor"),
    ("28", "Tarjeta de débito"),
    ("29", "Tarjeta de servicios"),
    ("30", "Aplicación de anticipos"),
    ("31", "Intermediario pagos"),
    ("99", "Por definir"),
];

static PAYMENT_METHODS: &[(&str, &str)] = &[
    ("PPD", "Pago en parcialidades o diferido"),
    ("PUE", "Pago en una sola exhibición"),
];

static TAX_REGIMES: &[(&str, &str)] = &[
    ("601", "General de Ley Personas Morales"),
    ("603", "Personas Morales con Fines no Lucrativos"),
    ("605", "Sueldos y Salarios e Ingresos Asimilados a Salarios"),
    ("606", "Arrendamiento"),
    ("607", "Régimen de Enajenación o Adquisición de Bienes"),
    ("608", "Demás ingresos"),
    ("609", "Consolidación"),
    ("610", "Residentes en el Extranjero sin Establecimiento Permanente en México"),
    ("611", "Ingresos por Dividendos (socios y accionistas)"),
    ("612", "Personas Físicas con Actividades Empresariales y Profesionales"),
    ("614", "Ingresos por intereses"),
    ("615", "Régimen de los ingresos por obtención de premios"),
    ("616", "Sin obligaciones fiscales"),
    ("620", "Sociedades Cooperativas de Producción que optan por diferir sus ingresos"),
    ("621", "Incorporación Fiscal"),
    ("622", "Actividades Agrícolas, Ganaderas, Silvícolas y Pesqueras"),
    ("623", "Opcional para Grupos de Sociedades"),
    ("624", "Coordinados"),
    ("625", "Régimen de las Actividades Empresariales con ingresos a través de Plataformas Tecnológicas"),
    ("626", "Régimen Simplificado de Confianza"),
    ("628", "Hidrocarburos"),
    ("629", "De los Regímenes Fiscales Preferentes y de las Empresas Multinacionales"),
    ("630", "Enajenación de acciones en bolsa de valores"),
];

static RECEIPT_TYPES: &[(&str, &str)] = &[
    ("E", "Egreso"),
    ("I", "Ingreso"),
    ("N", "Nómina"),
    ("P", "Pago"),
    ("T", "Traslado"),
];

static RELATION_TYPES: &[(&str, &str)] = &[
    ("01", "Nota de crédito de los documentos relacionados"),
    ("02", "Nota de débito de los documentos relacionados"),
    ("03", "Devolución de mercancía sobre facturas o traslados previos"),
    ("04", "Sustitución de los CFDI previos"),
    ("05", "Traslados de mercancías facturados previamente"),
    ("06", "Factura generada por los traslados previos"),
    ("07", "CFDI por aplicación de anticipo"),
    ("08", "Factura generada por pagos en parcialidades"),
    ("09", "Factura generada por pagos diferidos"),
];

static CFDI_USES: &[(&str, &str)] = &[
    ("CN01", "Nómina"),
    ("CP01", "Pagos"),
    ("D01", "Honorarios médicos, dentales y gastos hospitalarios"),
    ("D02", "Gastos médicos por incapacidad o discapacidad"),
    ("D03", "Gastos funerales"),
    ("D04", "Donativos"),
    ("D05", "Intereses reales efectivamente pagados por créditos hipotecarios (casa habitación)"),
    ("D06", "Aportaciones voluntarias al SAR"),
    ("D07", "Primas por seguros de gastos médicos"),
    ("D08", "Gastos de transportación escolar obligatoria"),
    ("D09", "Depósitos en cuentas para el ahorro, primas que tengan como base planes de pensiones"),
    ("D10", "Pagos por servicios educativos (colegiaturas)"),
    ("G01", "Adquisición de mercancías"),
    ("G02", "Devoluciones, descuentos o bonificaciones"),
    ("G03", "Gastos en general"),
    ("I01", "Construcciones"),
    ("I02", "Mobiliario y equipo de oficina por inversiones"),
    ("I03", "Equipo de transporte"),
    ("I04", "Equipo de computo y accesorios"),
    ("I05", "Dados, troqueles, moldes, matrices y herramental"),
    ("I06", "Comunicaciones telefónicas"),
    ("I07", "Comunicaciones satelitales"),
    ("I08", "Otra maquinaria y equipo"),
    ("P01", "Por definir"),
    ("S01", "Sin efectos fiscales"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_known_codes() {
        assert_eq!(describe(Catalog::Taxes, "002"), "002 - IVA");
        assert_eq!(
            describe(Catalog::PaymentForms, "03"),
            "03 - Transferencia electrónica de fondos"
        );
        assert_eq!(
            describe(Catalog::PaymentMethods, "PUE"),
            "PUE - Pago en una sola exhibición"
        );
        assert_eq!(
            describe(Catalog::TaxRegimes, "601"),
            "601 - General de Ley Personas Morales"
        );
        assert_eq!(describe(Catalog::ReceiptTypes, "I"), "I - Ingreso");
        assert_eq!(
            describe(Catalog::RelationTypes, "04"),
            "04 - Sustitución de los CFDI previos"
        );
        assert_eq!(describe(Catalog::CfdiUses, "G03"), "G03 - Gastos en general");
        assert_eq!(describe(Catalog::Currencies, "MXN"), "MXN - Peso Mexicano");
        assert_eq!(describe(Catalog::Units, "H87"), "H87 - Pieza");
    }

    #[test]
    fn full_unit_and_currency_catalogs() {
        assert_eq!(Catalog::Currencies.lookup("SEK"), Some("Corona sueca"));
        assert_eq!(Catalog::Currencies.lookup("INR"), Some("Rupia india"));
        assert_eq!(describe(Catalog::Currencies, "USD"), "USD - Dólar americano");
        assert_eq!(Catalog::Units.lookup("MGM"), Some("Miligramo"));
        assert_eq!(Catalog::Units.lookup("MMT"), Some("Milímetro"));
        assert_eq!(Catalog::Units.lookup("LBR"), Some("Libra"));
        assert_eq!(Catalog::Units.lookup("XNA"), Some("No disponible"));
        assert_eq!(describe(Catalog::Units, "E48"), "E48 - Unidad de servicio");
        assert!(Catalog::Units.entries().len() > 2000);
        assert!(Catalog::Currencies.entries().len() > 170);
    }

    #[test]
    fn describe_unknown_codes_is_empty() {
        for catalog in Catalog::ALL {
            assert_eq!(catalog.describe("NOPE"), "", "{}", catalog.sat_name());
            assert_eq!(catalog.describe(""), "", "{}", catalog.sat_name());
        }
    }

    #[test]
    fn lookups_are_case_sensitive() {
        assert_eq!(Catalog::ReceiptTypes.lookup("i"), None);
        assert_eq!(Catalog::CfdiUses.lookup("g03"), None);
    }

    #[test]
    fn every_entry_describes_itself() {
        for catalog in Catalog::ALL {
            for (code, description) in catalog.entries() {
                assert_eq!(catalog.describe(code), format!("{code} - {description}"));
            }
        }
    }

    #[test]
    fn lists_are_sorted() {
        for catalog in Catalog::ALL {
            for window in catalog.entries().windows(2) {
                assert!(
                    window[0].0 < window[1].0,
                    "{} not sorted: {} >= {}",
                    catalog.sat_name(),
                    window[0].0,
                    window[1].0
                );
            }
        }
    }
}
